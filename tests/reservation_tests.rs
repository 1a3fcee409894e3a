//! Integration tests for availability search and reservations.

mod common;

use common::*;
use vehicle_rental::dto::{Command, CommandOutput};
use vehicle_rental::models::{Reservation, VehicleSearch};
use vehicle_rental::repositories::{CustomerRepository, ReservationRepository, VehicleRepository};
use vehicle_rental::services::ReservationService;
use vehicle_rental::AppError;

// ========== SEARCH ==========

#[tokio::test]
async fn test_search_filters_are_optional() {
    let (connection, _) = seeded().await;
    let vehicles = VehicleRepository::new(connection.pool().clone());

    let all = vehicles.search(&VehicleSearch::new()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].vlicense, SUV_LICENSE);

    let suvs = vehicles
        .search(&VehicleSearch::new().vehicle_type("SUV").location("Main St"))
        .await
        .unwrap();
    assert_eq!(suvs.len(), 1);

    let trucks = vehicles
        .search(&VehicleSearch::new().vehicle_type("Truck"))
        .await
        .unwrap();
    assert!(trucks.is_empty());
}

#[tokio::test]
async fn test_search_excludes_overlapping_rental() {
    let (connection, controller) = seeded().await;
    let vehicles = VehicleRepository::new(connection.pool().clone());

    let output = controller
        .dispatch(Command::WalkInRental(vehicle_rental::dto::WalkInRentalRequest {
            reservation: reservation_request("DL-1", "SUV", june(1, 3)),
            card: card(),
        }))
        .await
        .unwrap();
    assert!(matches!(output, CommandOutput::Rented(_)));

    let overlapping = vehicles
        .search(&VehicleSearch::new().vehicle_type("SUV").period(june(2, 4)))
        .await
        .unwrap();
    assert!(overlapping.is_empty());

    let later = vehicles
        .search(&VehicleSearch::new().vehicle_type("SUV").period(june(10, 12)))
        .await
        .unwrap();
    assert_eq!(later.len(), 1);
}

// ========== RESERVATIONS ==========

#[tokio::test]
async fn test_confirmation_numbers_increase_without_reuse() {
    let (connection, _) = seeded().await;
    let pool = connection.pool().clone();
    let service = ReservationService::new(pool.clone());
    let reservations = ReservationRepository::new(pool, connection.dialect());

    let first = service
        .make_reservation(&reservation_request("DL-1", "SUV", june(1, 3)))
        .await
        .unwrap();
    let second = service
        .make_reservation(&reservation_request("DL-2", "SUV", june(1, 3)))
        .await
        .unwrap();
    assert_eq!((first, second), (1, 2));

    reservations.delete(second).await.unwrap();
    let third = service
        .make_reservation(&reservation_request("DL-3", "SUV", june(1, 3)))
        .await
        .unwrap();
    assert_eq!(third, 3);
}

#[tokio::test]
async fn test_next_confirmation_follows_inserted_numbers() {
    let (connection, _) = seeded().await;
    let pool = connection.pool().clone();
    let reservations = ReservationRepository::new(pool.clone(), connection.dialect());
    CustomerRepository::new(pool.clone())
        .insert(&customer("DL-1"))
        .await
        .unwrap();

    for conf_no in [5, 6, 7] {
        reservations
            .insert(&Reservation {
                conf_no,
                vtname: "SUV".to_string(),
                dlicense: "DL-1".to_string(),
                period: june(20, 21),
            })
            .await
            .unwrap();
    }

    let next = ReservationService::new(pool)
        .make_reservation(&reservation_request("DL-2", "SUV", june(1, 3)))
        .await
        .unwrap();
    assert_eq!(next, 8);
}

#[tokio::test]
async fn test_no_availability_writes_nothing() {
    let (connection, _) = seeded().await;
    let pool = connection.pool().clone();
    let service = ReservationService::new(pool.clone());

    let result = service
        .make_reservation(&reservation_request("DL-NEW", "Truck", june(1, 3)))
        .await;
    match result {
        Err(AppError::NoAvailability {
            vehicle_type,
            location,
        }) => {
            assert_eq!(vehicle_type, "Truck");
            assert_eq!(location, "Main St");
        }
        other => panic!("expected NoAvailability, got {:?}", other),
    }

    let reservations = ReservationRepository::new(pool.clone(), connection.dialect());
    assert_eq!(reservations.count().await.unwrap(), 0);
    let customers = CustomerRepository::new(pool);
    assert!(customers.find_by_license("DL-NEW").await.unwrap().is_none());
}

#[tokio::test]
async fn test_repeat_customer_is_created_once() {
    let (connection, _) = seeded().await;
    let pool = connection.pool().clone();
    let service = ReservationService::new(pool.clone());

    service
        .make_reservation(&reservation_request("DL-1", "SUV", june(1, 3)))
        .await
        .unwrap();
    service
        .make_reservation(&reservation_request("DL-1", "SUV", june(1, 3)))
        .await
        .unwrap();

    let customers = CustomerRepository::new(pool).list_all().await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].dlicense, "DL-1");
}

#[tokio::test]
async fn test_reversed_window_is_rejected() {
    let (connection, _) = seeded().await;
    let service = ReservationService::new(connection.pool().clone());

    let result = service
        .make_reservation(&reservation_request("DL-1", "SUV", june(5, 1)))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
