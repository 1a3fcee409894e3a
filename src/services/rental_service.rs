use sqlx::{AnyConnection, AnyPool};
use tracing::info;
use validator::Validate;

use super::{finish, ReservationService};
use crate::dto::{RentalRequest, WalkInRentalRequest};
use crate::models::{PaymentCard, RentalReceipt, VehicleSearch, VehicleStatus};
use crate::repositories::rental_repository::NewRental;
use crate::repositories::{log_exception, RentalRepository, ReservationRepository, VehicleRepository};
use crate::utils::errors::AppError;

/// Rental creation, from a reservation or as a walk-in
pub struct RentalService {
    pool: AnyPool,
}

impl RentalService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Convert a reservation into a rental
    pub async fn make_rental(&self, request: &RentalRequest) -> Result<RentalReceipt, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let result = Self::rent(&mut tx, request.conf_no, &request.location, &request.card).await;
        let receipt = finish(tx, result).await?;

        info!(
            "Rental {} opened for reservation {} ({})",
            receipt.rid, receipt.conf_no, receipt.vlicense
        );
        Ok(receipt)
    }

    /// Reserve and rent in one step.
    ///
    /// Both steps share one transaction, so a failed rental leaves no
    /// reservation behind.
    pub async fn walk_in_rental(
        &self,
        request: &WalkInRentalRequest,
    ) -> Result<RentalReceipt, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let result = Self::reserve_and_rent(&mut tx, request).await;
        let receipt = finish(tx, result).await?;

        info!(
            "Walk-in rental {} opened for {} ({})",
            receipt.rid, request.reservation.customer.dlicense, receipt.vlicense
        );
        Ok(receipt)
    }

    async fn reserve_and_rent(
        conn: &mut AnyConnection,
        request: &WalkInRentalRequest,
    ) -> Result<RentalReceipt, AppError> {
        let conf_no = ReservationService::reserve(conn, &request.reservation).await?;
        Self::rent(conn, conf_no, &request.reservation.location, &request.card).await
    }

    async fn rent(
        conn: &mut AnyConnection,
        conf_no: i64,
        location: &str,
        card: &PaymentCard,
    ) -> Result<RentalReceipt, AppError> {
        let reservation = ReservationRepository::find_in(conn, conf_no)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} does not exist", conf_no)))?;

        if let Some(existing) = RentalRepository::find_by_confirmation_in(conn, conf_no).await? {
            return Err(AppError::Conflict(format!(
                "Reservation {} was already rented as rental {}",
                conf_no, existing.rid
            )));
        }

        let search = VehicleSearch::new()
            .vehicle_type(reservation.vtname.clone())
            .location(location)
            .period(reservation.period);
        let vehicle = VehicleRepository::search_in(conn, &search)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NoAvailability {
                vehicle_type: reservation.vtname.clone(),
                location: location.to_string(),
            })?;

        let rid = RentalRepository::create_in(
            conn,
            NewRental {
                vlicense: &vehicle.vlicense,
                dlicense: &reservation.dlicense,
                period: &reservation.period,
                odometer: vehicle.odometer,
                card,
                conf_no: Some(conf_no),
            },
        )
        .await?;

        VehicleRepository::update_status_in(conn, &vehicle.vlicense, VehicleStatus::Rented, None)
            .await?;

        Ok(RentalReceipt {
            rid,
            conf_no,
            period: reservation.period,
            vlicense: vehicle.vlicense,
            location: location.to_string(),
        })
    }
}
