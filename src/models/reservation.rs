//! Reservation model

use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use validator::Validate;

use super::time_period::TimePeriod;

/// A reservation of a vehicle type for a customer and window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Reservation {
    pub conf_no: i64,

    #[validate(length(min = 1, max = 30))]
    pub vtname: String,

    #[validate(length(min = 1, max = 30))]
    pub dlicense: String,

    pub period: TimePeriod,
}

impl<'r> FromRow<'r, AnyRow> for Reservation {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            conf_no: row.try_get("conf_no")?,
            vtname: row.try_get("vtname")?,
            dlicense: row.try_get("dlicense")?,
            period: TimePeriod::from_row(row)?,
        })
    }
}
