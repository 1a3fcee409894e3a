//! Business rules
//!
//! Each operation runs in exactly one transaction: committed when the whole
//! operation succeeds, rolled back on any failure.

pub mod login_service;
pub mod rental_service;
pub mod reservation_service;
pub mod return_service;

pub use login_service::{LoginOutcome, LoginService};
pub use rental_service::RentalService;
pub use reservation_service::ReservationService;
pub use return_service::ReturnService;

use sqlx::{Any, Transaction};

use crate::database::connection::rollback;
use crate::repositories::log_exception;
use crate::utils::errors::AppError;

/// Commit the transaction if the operation succeeded, roll it back otherwise
pub(crate) async fn finish<T>(
    tx: Transaction<'static, Any>,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(log_exception)?;
            Ok(value)
        }
        Err(e) => {
            rollback(tx).await;
            Err(e)
        }
    }
}
