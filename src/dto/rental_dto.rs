use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::reservation_dto::ReservationRequest;
use crate::models::PaymentCard;

/// Rent the vehicle for an existing reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RentalRequest {
    #[validate(range(min = 1))]
    pub conf_no: i64,

    #[validate(length(min = 1, max = 60))]
    pub location: String,

    #[validate]
    pub card: PaymentCard,
}

/// Rent without a prior reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WalkInRentalRequest {
    #[validate]
    pub reservation: ReservationRequest,

    #[validate]
    pub card: PaymentCard,
}

/// Close a rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReturnRequest {
    #[validate(range(min = 1))]
    pub rid: i64,

    pub return_date: NaiveDate,

    pub return_time: NaiveTime,

    #[validate(range(min = 0))]
    pub odometer: i64,

    pub full_tank: bool,
}
