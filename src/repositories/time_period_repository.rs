use sqlx::AnyPool;

use super::{delete_outcome, execute_committed, DeleteOutcome};
use crate::models::TimePeriod;
use crate::utils::errors::AppError;

pub struct TimePeriodRepository {
    pool: AnyPool,
}

impl TimePeriodRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, period: &TimePeriod) -> Result<(), AppError> {
        period.ensure_ordered()?;
        let [from_date, from_time, to_date, to_time] = period.columns();

        let query = sqlx::query(
            "INSERT INTO time_period (from_date, from_time, to_date, to_time) VALUES ($1, $2, $3, $4)",
        )
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time);
        execute_committed(&self.pool, query).await?;

        Ok(())
    }

    pub async fn delete(&self, period: &TimePeriod) -> Result<DeleteOutcome, AppError> {
        let [from_date, from_time, to_date, to_time] = period.columns();

        let query = sqlx::query(
            r#"
            DELETE FROM time_period
            WHERE from_date = $1 AND from_time = $2 AND to_date = $3 AND to_time = $4
            "#,
        )
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time);
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Time period {}", period)))
    }
}
