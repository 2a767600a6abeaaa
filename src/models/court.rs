use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sport::Sport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub id: Uuid,
    pub name: String,
    pub sport: Sport,
}

#[derive(Deserialize)]
pub struct CreateCourtReq {
    pub name: String,
    pub sport: String,
}

#[derive(Deserialize)]
pub struct CourtQueryParams {
    pub sport: Option<String>,
}
