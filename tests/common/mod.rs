//! Shared fixtures: an in-memory SQLite database with one Vancouver branch,
//! an SUV type and one available SUV.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use vehicle_rental::config::DatabaseConfig;
use vehicle_rental::controllers::RentalController;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::dto::{ReservationRequest, ReturnRequest};
use vehicle_rental::models::{
    Branch, Customer, PaymentCard, TimePeriod, Vehicle, VehicleStatus, VehicleType,
};
use vehicle_rental::repositories::{BranchRepository, VehicleRepository};

pub const MEMORY_URL: &str = "sqlite::memory:";
pub const SUV_LICENSE: &str = "SUV-001";

pub async fn connect() -> DatabaseConnection {
    let connection = DatabaseConnection::connect(&DatabaseConfig::with_url(MEMORY_URL), "", "")
        .await
        .unwrap();
    connection.install_schema().await.unwrap();
    connection
}

/// A connected database with the Vancouver branch and one available SUV
pub async fn seeded() -> (DatabaseConnection, RentalController) {
    let connection = connect().await;
    let pool = connection.pool().clone();

    BranchRepository::new(pool.clone())
        .insert(&vancouver())
        .await
        .unwrap();
    let vehicles = VehicleRepository::new(pool);
    vehicles.insert_type(&suv_type()).await.unwrap();
    vehicles.insert(&vehicle(SUV_LICENSE, "SUV")).await.unwrap();

    let controller = RentalController::new(&connection);
    (connection, controller)
}

pub fn vancouver() -> Branch {
    Branch::new("Main St", "Vancouver")
}

pub fn suv_type() -> VehicleType {
    VehicleType {
        vtname: "SUV".to_string(),
        features: "4WD".to_string(),
        wrate: 700.0,
        drate: 120.0,
        hrate: 20.0,
        wirate: 70.0,
        dirate: 12.0,
        hirate: 2.0,
        krate: 0.25,
    }
}

pub fn vehicle(vlicense: &str, vtname: &str) -> Vehicle {
    Vehicle {
        vlicense: vlicense.to_string(),
        make: "Toyota".to_string(),
        model: "RAV4".to_string(),
        year: 2022,
        color: "Blue".to_string(),
        odometer: 10_000,
        status: VehicleStatus::Available.as_str().to_string(),
        vtname: vtname.to_string(),
        location: "Main St".to_string(),
        city: "Vancouver".to_string(),
    }
}

pub fn customer(dlicense: &str) -> Customer {
    Customer {
        dlicense: dlicense.to_string(),
        name: "Ada Clerk".to_string(),
        phone_number: "604-555-0100".to_string(),
        address: "1 Main St".to_string(),
    }
}

pub fn card() -> PaymentCard {
    PaymentCard {
        card_name: "VISA".to_string(),
        card_no: "4111 1111 1111 1111".to_string(),
        exp_date: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
    }
}

fn at(day: u32, hour: u32) -> (NaiveDate, NaiveTime) {
    (
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
    )
}

/// June 2024, from `from` 09:00 to `to` 17:00
pub fn june(from: u32, to: u32) -> TimePeriod {
    let (from_date, from_time) = at(from, 9);
    let (to_date, to_time) = at(to, 17);
    TimePeriod::new(from_date, from_time, to_date, to_time)
}

pub fn reservation_request(dlicense: &str, vtname: &str, period: TimePeriod) -> ReservationRequest {
    ReservationRequest {
        customer: customer(dlicense),
        location: "Main St".to_string(),
        vtname: vtname.to_string(),
        period,
    }
}

pub fn return_request(rid: i64, day: u32, hour: u32, odometer: i64) -> ReturnRequest {
    let (return_date, return_time) = at(day, hour);
    ReturnRequest {
        rid,
        return_date,
        return_time,
        odometer,
        full_tank: true,
    }
}
