use sqlx::{AnyConnection, AnyPool};
use tracing::{debug, info};
use validator::Validate;

use super::finish;
use crate::dto::ReservationRequest;
use crate::models::VehicleSearch;
use crate::repositories::{log_exception, CustomerRepository, ReservationRepository, VehicleRepository};
use crate::utils::errors::AppError;

/// Reservation creation
pub struct ReservationService {
    pool: AnyPool,
}

impl ReservationService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Reserve a vehicle type and return the confirmation number.
    ///
    /// Fails with `NoAvailability`, writing nothing, when no vehicle of the
    /// requested type is free at the branch for the whole window.
    pub async fn make_reservation(&self, request: &ReservationRequest) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let result = Self::reserve(&mut tx, request).await;
        let conf_no = finish(tx, result).await?;

        info!(
            "Reservation {} made for {} ({} at {})",
            conf_no, request.customer.dlicense, request.vtname, request.location
        );
        Ok(conf_no)
    }

    /// Reservation steps on an open transaction
    pub(crate) async fn reserve(
        conn: &mut AnyConnection,
        request: &ReservationRequest,
    ) -> Result<i64, AppError> {
        request.validate()?;
        request.period.ensure_ordered()?;

        if CustomerRepository::upsert_in(conn, &request.customer).await? {
            debug!("Added new customer {}", request.customer.dlicense);
        }

        let search = VehicleSearch::new()
            .vehicle_type(request.vtname.clone())
            .location(request.location.clone())
            .period(request.period);
        let available = VehicleRepository::search_in(conn, &search).await?;
        if available.is_empty() {
            return Err(AppError::NoAvailability {
                vehicle_type: request.vtname.clone(),
                location: request.location.clone(),
            });
        }
        debug!(
            "{} {} vehicle(s) free at {}",
            available.len(),
            request.vtname,
            request.location
        );

        ReservationRepository::create_in(
            conn,
            &request.vtname,
            &request.customer.dlicense,
            &request.period,
        )
        .await
    }
}
