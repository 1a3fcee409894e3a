use sqlx::{AnyConnection, AnyPool};
use validator::Validate;

use super::{delete_outcome, execute_committed, log_exception, DeleteOutcome};
use crate::models::{SearchResult, Vehicle, VehicleSearch, VehicleStatus, VehicleType};
use crate::utils::errors::AppError;

// Without a window a vehicle must be available right now. With a window it
// must not be in maintenance and must have no open rental overlapping it.
const SEARCH_SQL: &str = r#"
    SELECT v.vlicense, v.make, v.model, v.year, v.color, v.odometer,
           v.vtname, v.location, v.city
    FROM vehicle v
    WHERE ($1 IS NULL OR v.vtname = $1)
      AND ($2 IS NULL OR v.location = $2)
      AND (
            ($3 IS NULL AND v.status = 'available')
         OR ($3 IS NOT NULL
             AND v.status <> 'maintenance'
             AND NOT EXISTS (
                 SELECT 1 FROM rental r
                 WHERE r.vlicense = v.vlicense
                   AND (r.from_date || ' ' || r.from_time) < $4
                   AND (r.to_date || ' ' || r.to_time) > $3
                   AND NOT EXISTS (
                       SELECT 1 FROM vehicle_return x WHERE x.rid = r.rid
                   )
             ))
      )
    ORDER BY v.vlicense
"#;

pub struct VehicleRepository {
    pool: AnyPool,
}

impl VehicleRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, vehicle: &Vehicle) -> Result<(), AppError> {
        vehicle.validate()?;
        if vehicle.status().is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown vehicle status '{}'",
                vehicle.status
            )));
        }

        let query = sqlx::query(
            r#"
            INSERT INTO vehicle (vlicense, make, model, year, color, odometer, status, vtname, location, city)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(vehicle.vlicense.clone())
        .bind(vehicle.make.clone())
        .bind(vehicle.model.clone())
        .bind(vehicle.year)
        .bind(vehicle.color.clone())
        .bind(vehicle.odometer)
        .bind(vehicle.status.clone())
        .bind(vehicle.vtname.clone())
        .bind(vehicle.location.clone())
        .bind(vehicle.city.clone());
        execute_committed(&self.pool, query).await?;

        Ok(())
    }

    pub async fn delete(&self, vlicense: &str) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM vehicle WHERE vlicense = $1").bind(vlicense.to_string());
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Vehicle {}", vlicense)))
    }

    pub async fn insert_type(&self, vehicle_type: &VehicleType) -> Result<(), AppError> {
        vehicle_type.validate()?;

        let query = sqlx::query(
            r#"
            INSERT INTO vehicle_type (vtname, features, wrate, drate, hrate, wirate, dirate, hirate, krate)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(vehicle_type.vtname.clone())
        .bind(vehicle_type.features.clone())
        .bind(vehicle_type.wrate)
        .bind(vehicle_type.drate)
        .bind(vehicle_type.hrate)
        .bind(vehicle_type.wirate)
        .bind(vehicle_type.dirate)
        .bind(vehicle_type.hirate)
        .bind(vehicle_type.krate);
        execute_committed(&self.pool, query).await?;

        Ok(())
    }

    pub async fn delete_type(&self, vtname: &str) -> Result<DeleteOutcome, AppError> {
        let query = sqlx::query("DELETE FROM vehicle_type WHERE vtname = $1").bind(vtname.to_string());
        let rows = execute_committed(&self.pool, query).await?;

        Ok(delete_outcome(rows, || format!("Vehicle type {}", vtname)))
    }

    pub async fn find_by_license(&self, vlicense: &str) -> Result<Option<Vehicle>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(log_exception)?;
        Self::find_by_license_in(&mut conn, vlicense).await
    }

    pub async fn find_by_license_in(
        conn: &mut AnyConnection,
        vlicense: &str,
    ) -> Result<Option<Vehicle>, AppError> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT vlicense, make, model, year, color, odometer, status, vtname, location, city
            FROM vehicle WHERE vlicense = $1
            "#,
        )
        .bind(vlicense.to_string())
        .fetch_optional(&mut *conn)
        .await
        .map_err(log_exception)
    }

    pub async fn find_type_in(
        conn: &mut AnyConnection,
        vtname: &str,
    ) -> Result<Option<VehicleType>, AppError> {
        sqlx::query_as::<_, VehicleType>(
            r#"
            SELECT vtname, features, wrate, drate, hrate, wirate, dirate, hirate, krate
            FROM vehicle_type WHERE vtname = $1
            "#,
        )
        .bind(vtname.to_string())
        .fetch_optional(&mut *conn)
        .await
        .map_err(log_exception)
    }

    /// Vehicles matching the optional filters; empty when nothing matches
    pub async fn search(&self, search: &VehicleSearch) -> Result<Vec<SearchResult>, AppError> {
        let mut conn = self.pool.acquire().await.map_err(log_exception)?;
        Self::search_in(&mut conn, search).await
    }

    pub async fn search_in(
        conn: &mut AnyConnection,
        search: &VehicleSearch,
    ) -> Result<Vec<SearchResult>, AppError> {
        sqlx::query_as::<_, SearchResult>(SEARCH_SQL)
            .bind(search.vehicle_type.clone())
            .bind(search.location.clone())
            .bind(search.period.map(|p| p.start_key()))
            .bind(search.period.map(|p| p.end_key()))
            .fetch_all(&mut *conn)
            .await
            .map_err(log_exception)
    }

    pub async fn update_status_in(
        conn: &mut AnyConnection,
        vlicense: &str,
        status: VehicleStatus,
        odometer: Option<i64>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE vehicle SET status = $1, odometer = COALESCE($2, odometer) WHERE vlicense = $3",
        )
        .bind(status.as_str())
        .bind(odometer)
        .bind(vlicense.to_string())
        .execute(&mut *conn)
        .await
        .map_err(log_exception)?;

        Ok(())
    }
}
