//! Time period value object
//!
//! A rental or reservation window, stored as four text columns.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use crate::utils::errors::AppError;
use crate::utils::validation::{DATE_FORMAT, TIME_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub from_date: NaiveDate,
    pub from_time: NaiveTime,
    pub to_date: NaiveDate,
    pub to_time: NaiveTime,
}

impl TimePeriod {
    pub fn new(from_date: NaiveDate, from_time: NaiveTime, to_date: NaiveDate, to_time: NaiveTime) -> Self {
        Self {
            from_date,
            from_time,
            to_date,
            to_time,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.from_date.and_time(self.from_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.to_date.and_time(self.to_time)
    }

    /// The window must end strictly after it starts
    pub fn ensure_ordered(&self) -> Result<(), AppError> {
        if self.end() <= self.start() {
            return Err(AppError::BadRequest(format!(
                "Time period must end after it starts ({})",
                self
            )));
        }
        Ok(())
    }

    /// `YYYY-MM-DD HH:MM:SS`, comparable with `date || ' ' || time` in SQL
    pub fn start_key(&self) -> String {
        timestamp_key(self.start())
    }

    pub fn end_key(&self) -> String {
        timestamp_key(self.end())
    }

    /// The four column values in insert order
    pub fn columns(&self) -> [String; 4] {
        [
            format_date(self.from_date),
            format_time(self.from_time),
            format_date(self.to_date),
            format_time(self.to_time),
        ]
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            format_date(self.from_date),
            format_time(self.from_time),
            format_date(self.to_date),
            format_time(self.to_time)
        )
    }
}

impl<'r> FromRow<'r, AnyRow> for TimePeriod {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            from_date: date_column(row, "from_date")?,
            from_time: time_column(row, "from_time")?,
            to_date: date_column(row, "to_date")?,
            to_time: time_column(row, "to_time")?,
        })
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn timestamp_key(at: NaiveDateTime) -> String {
    format!("{} {}", format_date(at.date()), format_time(at.time()))
}

/// Decode a `YYYY-MM-DD` text column
pub fn date_column(row: &AnyRow, column: &str) -> Result<NaiveDate, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Decode a `HH:MM:SS` text column
pub fn time_column(row: &AnyRow, column: &str) -> Result<NaiveTime, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(from: (u32, u32), to: (u32, u32)) -> TimePeriod {
        TimePeriod::new(
            NaiveDate::from_ymd_opt(2024, 5, from.0).unwrap(),
            NaiveTime::from_hms_opt(from.1, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, to.0).unwrap(),
            NaiveTime::from_hms_opt(to.1, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_keys_sort_chronologically() {
        let p = period((1, 9), (3, 17));
        assert_eq!(p.start_key(), "2024-05-01 09:00:00");
        assert_eq!(p.end_key(), "2024-05-03 17:00:00");
        assert!(p.start_key() < p.end_key());
    }

    #[test]
    fn test_ensure_ordered() {
        assert!(period((1, 9), (1, 10)).ensure_ordered().is_ok());
        assert!(period((1, 9), (1, 9)).ensure_ordered().is_err());
        assert!(period((2, 9), (1, 9)).ensure_ordered().is_err());
    }

    #[test]
    fn test_columns_and_display() {
        let p = period((1, 9), (3, 17));
        assert_eq!(
            p.columns(),
            [
                "2024-05-01".to_string(),
                "09:00:00".to_string(),
                "2024-05-03".to_string(),
                "17:00:00".to_string()
            ]
        );
        assert_eq!(p.to_string(), "2024-05-01 09:00:00 -> 2024-05-03 17:00:00");
    }
}
