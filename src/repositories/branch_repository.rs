use sqlx::AnyPool;
use validator::Validate;

use super::{delete_outcome, execute_committed, log_exception, DeleteOutcome};
use crate::models::Branch;
use crate::utils::errors::AppError;

pub struct BranchRepository {
    pool: AnyPool,
}

impl BranchRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, branch: &Branch) -> Result<(), AppError> {
        branch.validate()?;

        let query = sqlx::query("INSERT INTO branch (location, city) VALUES ($1, $2)")
            .bind(branch.location.clone())
            .bind(branch.city.clone());
        execute_committed(&self.pool, query).await?;

        Ok(())
    }

    pub async fn delete(&self, branch: &Branch) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM branch WHERE location = $1 AND city = $2")
            .bind(branch.location.clone())
            .bind(branch.city.clone());
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || {
            format!("Branch {} in {}", branch.location, branch.city)
        }))
    }

    /// All branches, in the order the database returns them
    pub async fn list_all(&self) -> Result<Vec<Branch>, AppError> {
        sqlx::query_as::<_, Branch>("SELECT location, city FROM branch")
            .fetch_all(&self.pool)
            .await
            .map_err(log_exception)
    }
}
