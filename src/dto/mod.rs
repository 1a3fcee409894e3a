//! Request and command types passed from the terminal to the dispatcher

pub mod command_dto;
pub mod rental_dto;
pub mod reservation_dto;

pub use command_dto::{Command, CommandOutput, Record, RecordKey};
pub use rental_dto::{RentalRequest, ReturnRequest, WalkInRentalRequest};
pub use reservation_dto::ReservationRequest;
