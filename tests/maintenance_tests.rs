//! Integration tests for the insert and delete maintenance entries.

mod common;

use common::*;
use vehicle_rental::dto::{Command, CommandOutput, Record, RecordKey};
use vehicle_rental::models::{Branch, Rental, Reservation, TimePeriod};
use vehicle_rental::repositories::{
    BranchRepository, DeleteOutcome, RentalRepository, ReservationRepository,
};
use vehicle_rental::AppError;

#[tokio::test]
async fn test_delete_missing_branch_warns_and_keeps_rows() {
    let (connection, controller) = seeded().await;
    let branches = BranchRepository::new(connection.pool().clone());
    let before = branches.list_all().await.unwrap().len();

    let output = controller
        .dispatch(Command::Delete(RecordKey::Branch(Branch::new("Nowhere", "Atlantis"))))
        .await
        .unwrap();
    assert_eq!(output, CommandOutput::Deleted("branch", DeleteOutcome::NotFound));
    assert_eq!(branches.list_all().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_duplicate_insert_is_not_persisted() {
    let (connection, controller) = seeded().await;

    let result = controller
        .dispatch(Command::Insert(Record::Branch(vancouver())))
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let branches = BranchRepository::new(connection.pool().clone())
        .list_all()
        .await
        .unwrap();
    assert_eq!(branches, vec![vancouver()]);
}

#[tokio::test]
async fn test_unknown_reference_is_not_persisted() {
    let (connection, controller) = seeded().await;

    let result = controller
        .dispatch(Command::Insert(Record::Reservation(Reservation {
            conf_no: 3,
            vtname: "SUV".to_string(),
            dlicense: "NO-SUCH-CUSTOMER".to_string(),
            period: june(1, 3),
        })))
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let reservations = ReservationRepository::new(connection.pool().clone(), connection.dialect());
    assert_eq!(reservations.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_insert_then_delete_each_kind() {
    let (_connection, controller) = seeded().await;

    let inserts = vec![
        Record::Branch(Branch::new("Oak St", "Burnaby")),
        Record::Customer(customer("DL-9")),
        Record::Vehicle(vehicle("SUV-002", "SUV")),
        Record::TimePeriod(june(1, 3)),
    ];
    for record in inserts {
        let kind = record.kind();
        let output = controller.dispatch(Command::Insert(record)).await.unwrap();
        assert_eq!(output, CommandOutput::Inserted(kind));
    }

    let deletes = vec![
        RecordKey::Vehicle("SUV-002".to_string()),
        RecordKey::Customer("DL-9".to_string()),
        RecordKey::Branch(Branch::new("Oak St", "Burnaby")),
        RecordKey::TimePeriod(june(1, 3)),
    ];
    for key in deletes {
        let kind = key.kind();
        let output = controller.dispatch(Command::Delete(key)).await.unwrap();
        assert_eq!(output, CommandOutput::Deleted(kind, DeleteOutcome::Deleted(1)));
    }
}

#[tokio::test]
async fn test_unknown_vehicle_status_is_rejected() {
    let (_connection, controller) = seeded().await;
    let mut stolen = vehicle("SUV-003", "SUV");
    stolen.status = "stolen".to_string();

    let result = controller.dispatch(Command::Insert(Record::Vehicle(stolen))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_list_branches_and_customers() {
    let (_connection, controller) = seeded().await;
    controller
        .dispatch(Command::Insert(Record::Customer(customer("DL-1"))))
        .await
        .unwrap();

    assert_eq!(
        controller.dispatch(Command::ListBranches).await.unwrap(),
        CommandOutput::Branches(vec![vancouver()])
    );
    assert_eq!(
        controller.dispatch(Command::ListCustomers).await.unwrap(),
        CommandOutput::Customers(vec![customer("DL-1")])
    );
}

fn inserted_rental(rid: i64, period: TimePeriod, conf_no: Option<i64>) -> Rental {
    Rental {
        rid,
        vlicense: SUV_LICENSE.to_string(),
        dlicense: "DL-1".to_string(),
        period,
        odometer: 10_000,
        card: card(),
        conf_no,
    }
}

fn reversed() -> TimePeriod {
    let forward = june(1, 3);
    TimePeriod::new(forward.to_date, forward.to_time, forward.from_date, forward.from_time)
}

#[tokio::test]
async fn test_rental_with_unknown_confirmation_is_not_persisted() {
    let (connection, controller) = seeded().await;
    controller
        .dispatch(Command::Insert(Record::Customer(customer("DL-1"))))
        .await
        .unwrap();

    let result = controller
        .dispatch(Command::Insert(Record::Rental(inserted_rental(
            5,
            june(1, 3),
            Some(999),
        ))))
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let rentals = RentalRepository::new(connection.pool().clone(), connection.dialect());
    assert_eq!(rentals.find(5).await.unwrap(), None);
}

#[tokio::test]
async fn test_reversed_reservation_window_is_rejected() {
    let (connection, controller) = seeded().await;
    controller
        .dispatch(Command::Insert(Record::Customer(customer("DL-1"))))
        .await
        .unwrap();

    let result = controller
        .dispatch(Command::Insert(Record::Reservation(Reservation {
            conf_no: 3,
            vtname: "SUV".to_string(),
            dlicense: "DL-1".to_string(),
            period: reversed(),
        })))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let blank_type = controller
        .dispatch(Command::Insert(Record::Reservation(Reservation {
            conf_no: 4,
            vtname: String::new(),
            dlicense: "DL-1".to_string(),
            period: june(1, 3),
        })))
        .await;
    assert!(matches!(blank_type, Err(AppError::Validation(_))));

    let reservations = ReservationRepository::new(connection.pool().clone(), connection.dialect());
    assert_eq!(reservations.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reversed_rental_window_is_rejected() {
    let (connection, controller) = seeded().await;
    controller
        .dispatch(Command::Insert(Record::Customer(customer("DL-1"))))
        .await
        .unwrap();

    let result = controller
        .dispatch(Command::Insert(Record::Rental(inserted_rental(6, reversed(), None))))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let rentals = RentalRepository::new(connection.pool().clone(), connection.dialect());
    assert_eq!(rentals.find(6).await.unwrap(), None);
}
