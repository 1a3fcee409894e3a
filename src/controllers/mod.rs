//! Command dispatch
//!
//! Routes menu commands to the business services and repositories.

pub mod rental_controller;

pub use rental_controller::RentalController;
