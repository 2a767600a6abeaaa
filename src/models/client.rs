use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::voucher::ClientTier;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub tier: ClientTier,
}

#[derive(Deserialize)]
pub struct CreateClientReq {
    pub name: String,
}

/// Tier from the number of approved bookings a client has made.
pub fn tier_for_booking_count(count: u64) -> ClientTier {
    if count >= 21 {
        ClientTier::Platinum
    } else if count >= 11 {
        ClientTier::Gold
    } else if count >= 6 {
        ClientTier::Iron
    } else {
        ClientTier::Lead
    }
}
