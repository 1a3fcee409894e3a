//! Data access
//!
//! Parameterized statements for every table. Maintenance writes commit
//! their own transaction; the business services compose the `*_in`
//! functions inside a transaction of their own.

pub mod branch_repository;
pub mod customer_repository;
pub mod rental_repository;
pub mod reservation_repository;
pub mod return_repository;
pub mod time_period_repository;
pub mod vehicle_repository;

pub use branch_repository::BranchRepository;
pub use customer_repository::CustomerRepository;
pub use rental_repository::RentalRepository;
pub use reservation_repository::ReservationRepository;
pub use return_repository::ReturnRepository;
pub use time_period_repository::TimePeriodRepository;
pub use vehicle_repository::VehicleRepository;

use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::{Any, AnyPool};
use tracing::{error, warn};

use crate::database::connection::rollback;
use crate::utils::errors::AppError;

/// Result of a delete by natural key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(u64),
    NotFound,
}

/// Log a failed statement and wrap it
pub(crate) fn log_exception(e: sqlx::Error) -> AppError {
    error!("[EXCEPTION] {}", e);
    AppError::Database(e)
}

/// Run one write statement in its own transaction.
///
/// Commits on success; on failure the transaction is rolled back and the
/// error is logged and returned.
pub(crate) async fn execute_committed<'q>(
    pool: &AnyPool,
    query: Query<'q, Any, AnyArguments<'q>>,
) -> Result<u64, AppError> {
    let mut tx = pool.begin().await.map_err(log_exception)?;
    match query.execute(&mut *tx).await {
        Ok(result) => {
            tx.commit().await.map_err(log_exception)?;
            Ok(result.rows_affected())
        }
        Err(e) => {
            rollback(tx).await;
            Err(log_exception(e))
        }
    }
}

/// Turn an affected row count into a delete outcome, warning on a no-op
pub(crate) fn delete_outcome(rows: u64, what: impl FnOnce() -> String) -> DeleteOutcome {
    if rows == 0 {
        warn!("[WARNING] {} does not exist!", what());
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted(rows)
    }
}
