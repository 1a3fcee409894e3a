use sqlx::{AnyConnection, AnyPool};
use validator::Validate;

use super::{delete_outcome, log_exception, DeleteOutcome};
use crate::database::connection::rollback;
use crate::database::Dialect;
use crate::models::{Reservation, TimePeriod};
use crate::utils::errors::AppError;

const SELECT_RESERVATION: &str = r#"
    SELECT conf_no, vtname, dlicense, from_date, from_time, to_date, to_time
    FROM reservation WHERE conf_no = $1
"#;

pub struct ReservationRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl ReservationRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    /// Insert a reservation with an explicit confirmation number.
    ///
    /// The number generator is moved past the inserted value so that the
    /// next generated confirmation number stays above every existing one.
    pub async fn insert(&self, reservation: &Reservation) -> Result<(), AppError> {
        reservation.validate()?;
        reservation.period.ensure_ordered()?;
        let [from_date, from_time, to_date, to_time] = reservation.period.columns();

        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let inserted = sqlx::query(
            r#"
            INSERT INTO reservation (conf_no, vtname, dlicense, from_date, from_time, to_date, to_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reservation.conf_no)
        .bind(reservation.vtname.clone())
        .bind(reservation.dlicense.clone())
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            rollback(tx).await;
            return Err(log_exception(e));
        }

        if let Some(resync) = self.dialect.resync_sequence("reservation", "conf_no") {
            if let Err(e) = sqlx::query(&resync).execute(&mut *tx).await {
                rollback(tx).await;
                return Err(log_exception(e));
            }
        }

        tx.commit().await.map_err(log_exception)?;
        Ok(())
    }

    pub async fn delete(&self, conf_no: i64) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM reservation WHERE conf_no = $1").bind(conf_no);
        let rows = super::execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Reservation {}", conf_no)))
    }

    pub async fn find(&self, conf_no: i64) -> Result<Option<Reservation>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(log_exception)?;
        Self::find_in(&mut conn, conf_no).await
    }

    pub async fn find_in(
        conn: &mut AnyConnection,
        conf_no: i64,
    ) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(SELECT_RESERVATION)
            .bind(conf_no)
            .fetch_optional(&mut *conn)
            .await
            .map_err(log_exception)
    }

    /// Insert a new reservation and return the generated confirmation number
    pub async fn create_in(
        conn: &mut AnyConnection,
        vtname: &str,
        dlicense: &str,
        period: &TimePeriod,
    ) -> Result<i64, AppError> {
        let [from_date, from_time, to_date, to_time] = period.columns();

        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO reservation (vtname, dlicense, from_date, from_time, to_date, to_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING conf_no
            "#,
        )
        .bind(vtname.to_string())
        .bind(dlicense.to_string())
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time)
        .fetch_one(&mut *conn)
        .await
        .map_err(log_exception)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservation")
            .fetch_one(&self.pool)
            .await
            .map_err(log_exception)
    }
}
