//! Branch model
//!
//! A rental branch, identified by its location within a city.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Branch {
    #[validate(length(min = 1, max = 60))]
    pub location: String,

    #[validate(length(min = 1, max = 60))]
    pub city: String,
}

impl Branch {
    pub fn new(location: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            city: city.into(),
        }
    }
}
