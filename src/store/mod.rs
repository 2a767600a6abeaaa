pub mod bookings;
pub mod clients;
pub mod courts;
pub mod payments;
pub mod sessions;
pub mod vouchers;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("slot is already filled")]
    SlotConflict,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("booking is not pending")]
    NotPending,
}
