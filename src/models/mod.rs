pub mod booking;
pub mod client;
pub mod court;
pub mod payment;
pub mod sport;
pub mod voucher;
