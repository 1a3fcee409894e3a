use sqlx::{AnyConnection, AnyPool};
use validator::Validate;

use super::{delete_outcome, execute_committed, log_exception, DeleteOutcome};
use crate::models::Customer;
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: AnyPool,
}

impl CustomerRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, customer: &Customer) -> Result<(), AppError> {
        customer.validate()?;

        let query = sqlx::query(
            "INSERT INTO customer (dlicense, name, phone_number, address) VALUES ($1, $2, $3, $4)",
        )
        .bind(customer.dlicense.clone())
        .bind(customer.name.clone())
        .bind(customer.phone_number.clone())
        .bind(customer.address.clone());
        execute_committed(&self.pool, query).await?;

        Ok(())
    }

    pub async fn delete(&self, dlicense: &str) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM customer WHERE dlicense = $1").bind(dlicense.to_string());
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Customer {}", dlicense)))
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT dlicense, name, phone_number, address FROM customer",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(log_exception)
    }

    pub async fn find_by_license(&self, dlicense: &str) -> Result<Option<Customer>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(log_exception)?;
        Self::find_by_license_in(&mut conn, dlicense).await
    }

    pub async fn find_by_license_in(
        conn: &mut AnyConnection,
        dlicense: &str,
    ) -> Result<Option<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT dlicense, name, phone_number, address FROM customer WHERE dlicense = $1",
        )
        .bind(dlicense.to_string())
        .fetch_optional(&mut *conn)
        .await
        .map_err(log_exception)
    }

    /// Insert the customer unless one with the same license already exists.
    ///
    /// Existing details are left untouched. Returns whether a row was created.
    pub async fn upsert_in(conn: &mut AnyConnection, customer: &Customer) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO customer (dlicense, name, phone_number, address)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (dlicense) DO NOTHING
            "#,
        )
        .bind(customer.dlicense.clone())
        .bind(customer.name.clone())
        .bind(customer.phone_number.clone())
        .bind(customer.address.clone())
        .execute(&mut *conn)
        .await
        .map_err(log_exception)?;

        Ok(result.rows_affected() > 0)
    }
}
