//! Vehicle and vehicle type models
//!
//! Vehicle types carry the rates used to bill a rental; vehicles belong to
//! one type and one branch.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Vehicle status, stored as lowercase text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Some(VehicleStatus::Available),
            "rented" => Some(VehicleStatus::Rented),
            "maintenance" => Some(VehicleStatus::Maintenance),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle type with its rental, insurance and distance rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct VehicleType {
    #[validate(length(min = 1, max = 30))]
    pub vtname: String,

    #[validate(length(max = 200))]
    pub features: String,

    #[validate(range(min = 0.0))]
    pub wrate: f64,
    #[validate(range(min = 0.0))]
    pub drate: f64,
    #[validate(range(min = 0.0))]
    pub hrate: f64,
    #[validate(range(min = 0.0))]
    pub wirate: f64,
    #[validate(range(min = 0.0))]
    pub dirate: f64,
    #[validate(range(min = 0.0))]
    pub hirate: f64,
    #[validate(range(min = 0.0))]
    pub krate: f64,
}

/// A concrete vehicle in the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Vehicle {
    #[validate(length(min = 1, max = 20))]
    pub vlicense: String,

    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i64,

    #[validate(length(min = 1, max = 30))]
    pub color: String,

    #[validate(range(min = 0))]
    pub odometer: i64,

    pub status: String,

    #[validate(length(min = 1, max = 30))]
    pub vtname: String,

    #[validate(length(min = 1, max = 60))]
    pub location: String,

    #[validate(length(min = 1, max = 60))]
    pub city: String,
}

impl Vehicle {
    pub fn status(&self) -> Option<VehicleStatus> {
        VehicleStatus::parse(&self.status)
    }
}
