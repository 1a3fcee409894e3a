use chrono::NaiveDateTime;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use sqlx::{AnyConnection, AnyPool};
use tracing::info;
use validator::Validate;

use super::finish;
use crate::dto::ReturnRequest;
use crate::models::{ChargeBreakdown, ReturnReceipt, ReturnRecord, VehicleStatus, VehicleType};
use crate::repositories::{log_exception, RentalRepository, ReturnRepository, VehicleRepository};
use crate::utils::errors::AppError;

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_WEEK: i64 = 7 * HOURS_PER_DAY;

/// Return recording and billing
pub struct ReturnService {
    pool: AnyPool,
}

impl ReturnService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub async fn record_return(&self, request: &ReturnRequest) -> Result<ReturnReceipt, AppError> {
        request.validate()?;

        let mut tx = self.pool.begin().await.map_err(log_exception)?;
        let result = Self::close_rental(&mut tx, request).await;
        let receipt = finish(tx, result).await?;

        info!(
            "Rental {} returned ({} km, total {})",
            receipt.rid, receipt.charge.km, receipt.charge.total
        );
        Ok(receipt)
    }

    async fn close_rental(
        conn: &mut AnyConnection,
        request: &ReturnRequest,
    ) -> Result<ReturnReceipt, AppError> {
        let rental = RentalRepository::find_in(conn, request.rid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental {} does not exist", request.rid)))?;

        if ReturnRepository::find_in(conn, rental.rid).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Rental {} was already returned",
                rental.rid
            )));
        }
        if request.odometer < rental.odometer {
            return Err(AppError::BadRequest(format!(
                "Odometer {} is below the pickup reading {}",
                request.odometer, rental.odometer
            )));
        }

        let vehicle = VehicleRepository::find_by_license_in(conn, &rental.vlicense)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} does not exist", rental.vlicense)))?;
        let vehicle_type = VehicleRepository::find_type_in(conn, &vehicle.vtname)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle type {} does not exist", vehicle.vtname)))?;

        let returned_at = request.return_date.and_time(request.return_time);
        let charge = compute_charge(
            &vehicle_type,
            rental.period.start(),
            returned_at,
            request.odometer - rental.odometer,
        )?;

        let record = ReturnRecord {
            rid: rental.rid,
            return_date: request.return_date,
            return_time: request.return_time,
            odometer: request.odometer,
            full_tank: request.full_tank,
            charge: charge.total,
        };
        ReturnRepository::insert_in(conn, &record).await?;
        VehicleRepository::update_status_in(
            conn,
            &rental.vlicense,
            VehicleStatus::Available,
            Some(request.odometer),
        )
        .await?;

        Ok(ReturnReceipt {
            rid: rental.rid,
            conf_no: rental.conf_no,
            vlicense: rental.vlicense,
            period: rental.period,
            returned_at,
            full_tank: request.full_tank,
            charge,
        })
    }
}

/// Bill a rental: whole weeks, then whole days, then started hours, each at
/// its own rental and insurance rate, plus the distance driven.
pub fn compute_charge(
    vehicle_type: &VehicleType,
    picked_up: NaiveDateTime,
    returned: NaiveDateTime,
    km: i64,
) -> Result<ChargeBreakdown, AppError> {
    let minutes = (returned - picked_up).num_minutes();
    if minutes < 0 {
        return Err(AppError::BadRequest(format!(
            "Return at {} is before pickup at {}",
            returned, picked_up
        )));
    }

    // started hours are billed in full, with at least one billable hour
    let billable_hours = ((minutes + 59) / 60).max(1);
    let weeks = billable_hours / HOURS_PER_WEEK;
    let days = (billable_hours % HOURS_PER_WEEK) / HOURS_PER_DAY;
    let hours = billable_hours % HOURS_PER_DAY;

    let rate = |value: f64| {
        Decimal::from_f64(value)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid rate {}", value)))
    };
    let units = |weekly: Decimal, daily: Decimal, hourly: Decimal| {
        weekly * Decimal::from(weeks) + daily * Decimal::from(days) + hourly * Decimal::from(hours)
    };

    let rental = units(
        rate(vehicle_type.wrate)?,
        rate(vehicle_type.drate)?,
        rate(vehicle_type.hrate)?,
    );
    let insurance = units(
        rate(vehicle_type.wirate)?,
        rate(vehicle_type.dirate)?,
        rate(vehicle_type.hirate)?,
    );
    let distance = rate(vehicle_type.krate)? * Decimal::from(km);

    Ok(ChargeBreakdown {
        weeks,
        days,
        hours,
        km,
        rental: rental.round_dp(2),
        insurance: insurance.round_dp(2),
        distance: distance.round_dp(2),
        total: (rental + insurance + distance).round_dp(2),
    })
}
