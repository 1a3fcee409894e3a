use tracing::debug;

use crate::database::DatabaseConnection;
use crate::dto::{Command, CommandOutput, Record, RecordKey};
use crate::repositories::{
    BranchRepository, CustomerRepository, DeleteOutcome, RentalRepository, ReservationRepository,
    ReturnRepository, TimePeriodRepository, VehicleRepository,
};
use crate::services::{RentalService, ReservationService, ReturnService};
use crate::utils::errors::AppError;

/// Dispatcher for one logged-in session
pub struct RentalController {
    branches: BranchRepository,
    customers: CustomerRepository,
    vehicles: VehicleRepository,
    reservations: ReservationRepository,
    rentals: RentalRepository,
    returns: ReturnRepository,
    time_periods: TimePeriodRepository,
    reservation_service: ReservationService,
    rental_service: RentalService,
    return_service: ReturnService,
}

impl RentalController {
    pub fn new(connection: &DatabaseConnection) -> Self {
        let pool = connection.pool().clone();
        let dialect = connection.dialect();

        Self {
            branches: BranchRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool.clone(), dialect),
            rentals: RentalRepository::new(pool.clone(), dialect),
            returns: ReturnRepository::new(pool.clone()),
            time_periods: TimePeriodRepository::new(pool.clone()),
            reservation_service: ReservationService::new(pool.clone()),
            rental_service: RentalService::new(pool.clone()),
            return_service: ReturnService::new(pool),
        }
    }

    pub async fn dispatch(&self, command: Command) -> Result<CommandOutput, AppError> {
        debug!("Dispatching {:?}", command);

        match command {
            Command::SearchVehicles(search) => {
                Ok(CommandOutput::Vehicles(self.vehicles.search(&search).await?))
            }
            Command::MakeReservation(request) => Ok(CommandOutput::Confirmation(
                self.reservation_service.make_reservation(&request).await?,
            )),
            Command::MakeRental(request) => Ok(CommandOutput::Rented(
                self.rental_service.make_rental(&request).await?,
            )),
            Command::WalkInRental(request) => Ok(CommandOutput::Rented(
                self.rental_service.walk_in_rental(&request).await?,
            )),
            Command::RecordReturn(request) => Ok(CommandOutput::Returned(
                self.return_service.record_return(&request).await?,
            )),
            Command::ListBranches => Ok(CommandOutput::Branches(self.branches.list_all().await?)),
            Command::ListCustomers => Ok(CommandOutput::Customers(self.customers.list_all().await?)),
            Command::Insert(record) => {
                let kind = record.kind();
                self.insert(record).await?;
                Ok(CommandOutput::Inserted(kind))
            }
            Command::Delete(key) => {
                let kind = key.kind();
                let outcome = self.delete(key).await?;
                Ok(CommandOutput::Deleted(kind, outcome))
            }
            Command::Quit => Ok(CommandOutput::Quit),
        }
    }

    async fn insert(&self, record: Record) -> Result<(), AppError> {
        match record {
            Record::Branch(branch) => self.branches.insert(&branch).await,
            Record::VehicleType(vehicle_type) => self.vehicles.insert_type(&vehicle_type).await,
            Record::Vehicle(vehicle) => self.vehicles.insert(&vehicle).await,
            Record::Customer(customer) => self.customers.insert(&customer).await,
            Record::Reservation(reservation) => self.reservations.insert(&reservation).await,
            Record::Rental(rental) => self.rentals.insert(&rental).await,
            Record::Return(record) => self.returns.insert(&record).await,
            Record::TimePeriod(period) => self.time_periods.insert(&period).await,
        }
    }

    async fn delete(&self, key: RecordKey) -> Result<DeleteOutcome, AppError> {
        match key {
            RecordKey::Branch(branch) => self.branches.delete(&branch).await,
            RecordKey::VehicleType(vtname) => self.vehicles.delete_type(&vtname).await,
            RecordKey::Vehicle(vlicense) => self.vehicles.delete(&vlicense).await,
            RecordKey::Customer(dlicense) => self.customers.delete(&dlicense).await,
            RecordKey::Reservation(conf_no) => self.reservations.delete(conf_no).await,
            RecordKey::Rental(rid) => self.rentals.delete(rid).await,
            RecordKey::Return(rid) => self.returns.delete(rid).await,
            RecordKey::TimePeriod(period) => self.time_periods.delete(&period).await,
        }
    }
}
