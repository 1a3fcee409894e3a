//! Data models
//!
//! Rows of the rental database and the value objects built from them.

pub mod branch;
pub mod customer;
pub mod rental;
pub mod reservation;
pub mod search;
pub mod time_period;
pub mod vehicle;
pub mod vehicle_return;

pub use branch::Branch;
pub use customer::Customer;
pub use rental::{PaymentCard, Rental, RentalReceipt};
pub use reservation::Reservation;
pub use search::{SearchResult, VehicleSearch};
pub use time_period::TimePeriod;
pub use vehicle::{Vehicle, VehicleStatus, VehicleType};
pub use vehicle_return::{ChargeBreakdown, ReturnReceipt, ReturnRecord};
