use sqlx::{AnyConnection, AnyPool};
use validator::Validate;

use super::{delete_outcome, log_exception, DeleteOutcome};
use crate::database::connection::rollback;
use crate::database::Dialect;
use crate::models::time_period::format_date;
use crate::models::{PaymentCard, Rental, TimePeriod};
use crate::utils::errors::AppError;

const RENTAL_COLUMNS: &str = "rid, vlicense, dlicense, from_date, from_time, to_date, to_time, \
                              odometer, card_name, card_no, exp_date, conf_no";

/// Fields of a rental before the database assigns its id
#[derive(Debug, Clone)]
pub struct NewRental<'a> {
    pub vlicense: &'a str,
    pub dlicense: &'a str,
    pub period: &'a TimePeriod,
    pub odometer: i64,
    pub card: &'a PaymentCard,
    pub conf_no: Option<i64>,
}

pub struct RentalRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl RentalRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    /// Insert a rental with an explicit id, keeping the id generator ahead of it
    pub async fn insert(&self, rental: &Rental) -> Result<(), AppError> {
        rental.card.validate()?;
        rental.period.ensure_ordered()?;
        let [from_date, from_time, to_date, to_time] = rental.period.columns();

        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let inserted = sqlx::query(
            r#"
            INSERT INTO rental (rid, vlicense, dlicense, from_date, from_time, to_date, to_time,
                                odometer, card_name, card_no, exp_date, conf_no)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(rental.rid)
        .bind(rental.vlicense.clone())
        .bind(rental.dlicense.clone())
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time)
        .bind(rental.odometer)
        .bind(rental.card.card_name.clone())
        .bind(rental.card.card_no.clone())
        .bind(format_date(rental.card.exp_date))
        .bind(rental.conf_no)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            rollback(tx).await;
            return Err(log_exception(e));
        }

        if let Some(resync) = self.dialect.resync_sequence("rental", "rid") {
            if let Err(e) = sqlx::query(&resync).execute(&mut *tx).await {
                rollback(tx).await;
                return Err(log_exception(e));
            }
        }

        tx.commit().await.map_err(log_exception)?;
        Ok(())
    }

    pub async fn delete(&self, rid: i64) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM rental WHERE rid = $1").bind(rid);
        let rows = super::execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Rental {}", rid)))
    }

    pub async fn find(&self, rid: i64) -> Result<Option<Rental>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(log_exception)?;
        Self::find_in(&mut conn, rid).await
    }

    pub async fn find_in(conn: &mut AnyConnection, rid: i64) -> Result<Option<Rental>, AppError> {
        let sql = format!("SELECT {} FROM rental WHERE rid = $1", RENTAL_COLUMNS);
        sqlx::query_as::<_, Rental>(&sql)
            .bind(rid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(log_exception)
    }

    /// The rental a reservation was converted into, if any
    pub async fn find_by_confirmation_in(
        conn: &mut AnyConnection,
        conf_no: i64,
    ) -> Result<Option<Rental>, AppError> {
        let sql = format!("SELECT {} FROM rental WHERE conf_no = $1", RENTAL_COLUMNS);
        sqlx::query_as::<_, Rental>(&sql)
            .bind(conf_no)
            .fetch_optional(&mut *conn)
            .await
            .map_err(log_exception)
    }

    /// Insert a new rental and return the generated rental id
    pub async fn create_in(conn: &mut AnyConnection, rental: NewRental<'_>) -> Result<i64, AppError> {
        let [from_date, from_time, to_date, to_time] = rental.period.columns();

        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO rental (vlicense, dlicense, from_date, from_time, to_date, to_time,
                                odometer, card_name, card_no, exp_date, conf_no)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING rid
            "#,
        )
        .bind(rental.vlicense.to_string())
        .bind(rental.dlicense.to_string())
        .bind(from_date)
        .bind(from_time)
        .bind(to_date)
        .bind(to_time)
        .bind(rental.odometer)
        .bind(rental.card.card_name.clone())
        .bind(rental.card.card_no.clone())
        .bind(format_date(rental.card.exp_date))
        .bind(rental.conf_no)
        .fetch_one(&mut *conn)
        .await
        .map_err(log_exception)
    }
}
