pub mod bookings;
pub mod clients;
pub mod courts;
pub mod revenue;
pub mod sessions;
pub mod vouchers;
