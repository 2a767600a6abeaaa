use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Booking lifecycle: created Pending, moved to Approved/Rejected by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub court_id: Uuid,
    pub user_id: Uuid,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub booking_date: OffsetDateTime,
    pub status: BookingStatus,
}

#[derive(Deserialize)]
pub struct BookingQueryParams {
    pub user_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct CancelBookingParams {
    pub user_id: Uuid,
}
