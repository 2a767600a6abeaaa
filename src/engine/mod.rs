pub mod availability;
pub mod pricing;
pub mod schedule;
pub mod session;
