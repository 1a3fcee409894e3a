//! Customer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A customer, keyed by driver's license number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Customer {
    #[validate(length(min = 1, max = 30))]
    pub dlicense: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,
}
