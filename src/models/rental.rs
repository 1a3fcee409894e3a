//! Rental model
//!
//! A rental binds one vehicle to a customer for a window. Rentals created
//! from a reservation keep its confirmation number; walk-in rentals get one
//! too, because they are booked through a reservation first.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use validator::Validate;

use super::time_period::{date_column, TimePeriod};
use crate::utils::validation::validate_card_number;

/// Payment card captured at pickup
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaymentCard {
    #[validate(length(min = 1, max = 30))]
    pub card_name: String,

    #[validate(custom = "validate_card_number")]
    pub card_no: String,

    pub exp_date: NaiveDate,
}

impl PaymentCard {
    /// Last four digits, for receipts and logs
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_no.chars().filter(|c| c.is_ascii_digit()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {}", tail)
    }
}

// Only the last four digits ever reach a log line.
impl fmt::Debug for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentCard")
            .field("card_name", &self.card_name)
            .field("card_no", &self.masked_number())
            .field("exp_date", &self.exp_date)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rid: i64,
    pub vlicense: String,
    pub dlicense: String,
    pub period: TimePeriod,
    pub odometer: i64,
    pub card: PaymentCard,
    pub conf_no: Option<i64>,
}

impl<'r> FromRow<'r, AnyRow> for Rental {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            rid: row.try_get("rid")?,
            vlicense: row.try_get("vlicense")?,
            dlicense: row.try_get("dlicense")?,
            period: TimePeriod::from_row(row)?,
            odometer: row.try_get("odometer")?,
            card: PaymentCard {
                card_name: row.try_get("card_name")?,
                card_no: row.try_get("card_no")?,
                exp_date: date_column(row, "exp_date")?,
            },
            conf_no: row.try_get("conf_no")?,
        })
    }
}

/// Receipt handed to the customer at pickup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalReceipt {
    pub rid: i64,
    pub conf_no: i64,
    pub period: TimePeriod,
    pub vlicense: String,
    pub location: String,
}
