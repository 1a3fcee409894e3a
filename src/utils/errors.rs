//! Error handling
//!
//! This module defines every error the rental desk can report and the
//! console tag each one is printed with.

use thiserror::Error;

/// Main application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No {vehicle_type} available at {location} for the requested period")]
    NoAvailability {
        vehicle_type: String,
        location: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended")]
    InputEnded,
}

impl AppError {
    /// Console tag used when the error is shown to the clerk.
    pub fn tag(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Io(_) | AppError::Terminal(_) => "[EXCEPTION]",
            _ => "[ERROR]",
        }
    }

    /// Business precondition failures the clerk can correct and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::NoAvailability { .. }
                | AppError::Conflict(_)
                | AppError::BadRequest(_)
                | AppError::Validation(_)
        )
    }

    /// Failures of the terminal itself, after which the menu cannot go on.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            AppError::Terminal(_) | AppError::Io(_) | AppError::Config(_) | AppError::InputEnded
        )
    }
}

impl From<rustyline::error::ReadlineError> for AppError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        AppError::Terminal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let db = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(db.tag(), "[EXCEPTION]");
        assert!(!db.is_recoverable());

        let none = AppError::NoAvailability {
            vehicle_type: "SUV".to_string(),
            location: "Vancouver".to_string(),
        };
        assert_eq!(none.tag(), "[ERROR]");
        assert!(none.is_recoverable());
        assert_eq!(
            none.to_string(),
            "No SUV available at Vancouver for the requested period"
        );
    }
}
