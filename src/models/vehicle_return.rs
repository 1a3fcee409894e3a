//! Return model
//!
//! A return closes a rental. The charge is computed when the return is
//! recorded and stored with it.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use super::time_period::{date_column, time_column, TimePeriod};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub rid: i64,
    pub return_date: NaiveDate,
    pub return_time: NaiveTime,
    pub odometer: i64,
    pub full_tank: bool,
    /// Exact amount; stored as decimal text
    pub charge: Decimal,
}

impl<'r> FromRow<'r, AnyRow> for ReturnRecord {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let full_tank: i64 = row.try_get("full_tank")?;
        Ok(Self {
            rid: row.try_get("rid")?,
            return_date: date_column(row, "return_date")?,
            return_time: time_column(row, "return_time")?,
            odometer: row.try_get("odometer")?,
            full_tank: full_tank != 0,
            charge: decimal_column(row, "charge")?,
        })
    }
}

fn decimal_column(row: &AnyRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    Decimal::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// How a return charge was made up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub km: i64,
    pub rental: Decimal,
    pub insurance: Decimal,
    pub distance: Decimal,
    pub total: Decimal,
}

/// Receipt handed to the customer at return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub rid: i64,
    pub conf_no: Option<i64>,
    pub vlicense: String,
    pub period: TimePeriod,
    pub returned_at: NaiveDateTime,
    pub full_tank: bool,
    pub charge: ChargeBreakdown,
}
