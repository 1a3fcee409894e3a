use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Customer, TimePeriod};

/// Request to reserve a vehicle type at a branch for a window.
///
/// The customer is created on the fly when their license is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReservationRequest {
    #[validate]
    pub customer: Customer,

    #[validate(length(min = 1, max = 60))]
    pub location: String,

    #[validate(length(min = 1, max = 30))]
    pub vtname: String,

    pub period: TimePeriod,
}
