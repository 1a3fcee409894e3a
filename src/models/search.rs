//! Availability search filters and results

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::time_period::TimePeriod;

/// Optional filters; `None` places no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleSearch {
    pub vehicle_type: Option<String>,
    pub location: Option<String>,
    pub period: Option<TimePeriod>,
}

impl VehicleSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn period(mut self, period: TimePeriod) -> Self {
        self.period = Some(period);
        self
    }
}

/// One available vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SearchResult {
    pub vlicense: String,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub color: String,
    pub odometer: i64,
    pub vtname: String,
    pub location: String,
    pub city: String,
}
