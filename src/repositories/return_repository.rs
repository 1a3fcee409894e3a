use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::{Any, AnyConnection, AnyPool};

use super::{delete_outcome, execute_committed, log_exception, DeleteOutcome};
use crate::models::time_period::{format_date, format_time};
use crate::models::ReturnRecord;
use crate::utils::errors::AppError;

pub struct ReturnRepository {
    pool: AnyPool,
}

impl ReturnRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &ReturnRecord) -> Result<(), AppError> {
        execute_committed(&self.pool, insert_query(record)).await?;
        Ok(())
    }

    pub async fn delete(&self, rid: i64) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM vehicle_return WHERE rid = $1").bind(rid);
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Return for rental {}", rid)))
    }

    pub async fn find_in(
        conn: &mut AnyConnection,
        rid: i64,
    ) -> Result<Option<ReturnRecord>, AppError> {
        sqlx::query_as::<_, ReturnRecord>(
            r#"
            SELECT rid, return_date, return_time, odometer, full_tank, charge
            FROM vehicle_return WHERE rid = $1
            "#,
        )
        .bind(rid)
        .fetch_optional(&mut *conn)
        .await
        .map_err(log_exception)
    }

    pub async fn insert_in(conn: &mut AnyConnection, record: &ReturnRecord) -> Result<(), AppError> {
        insert_query(record)
            .execute(&mut *conn)
            .await
            .map_err(log_exception)?;
        Ok(())
    }
}

fn insert_query(record: &ReturnRecord) -> Query<'static, Any, AnyArguments<'static>> {
    sqlx::query(
        r#"
        INSERT INTO vehicle_return (rid, return_date, return_time, odometer, full_tank, charge)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(record.rid)
    .bind(format_date(record.return_date))
    .bind(format_time(record.return_time))
    .bind(record.odometer)
    .bind(i64::from(record.full_tank))
    .bind(record.charge.to_string())
}
