use crate::models::{
    Branch, Customer, Rental, RentalReceipt, Reservation, ReturnReceipt, ReturnRecord,
    SearchResult, TimePeriod, Vehicle, VehicleSearch, VehicleType,
};
use crate::repositories::DeleteOutcome;

use super::{RentalRequest, ReservationRequest, ReturnRequest, WalkInRentalRequest};

/// A maintainable record, for the insert and delete menu entries
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Branch(Branch),
    VehicleType(VehicleType),
    Vehicle(Vehicle),
    Customer(Customer),
    Reservation(Reservation),
    Rental(Rental),
    Return(ReturnRecord),
    TimePeriod(TimePeriod),
}

impl Record {
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Branch(_) => "branch",
            Record::VehicleType(_) => "vehicle type",
            Record::Vehicle(_) => "vehicle",
            Record::Customer(_) => "customer",
            Record::Reservation(_) => "reservation",
            Record::Rental(_) => "rental",
            Record::Return(_) => "return",
            Record::TimePeriod(_) => "time period",
        }
    }
}

/// Natural key of a maintainable record, for the delete menu entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Branch(Branch),
    VehicleType(String),
    Vehicle(String),
    Customer(String),
    Reservation(i64),
    Rental(i64),
    Return(i64),
    TimePeriod(TimePeriod),
}

impl RecordKey {
    pub fn kind(&self) -> &'static str {
        match self {
            RecordKey::Branch(_) => "branch",
            RecordKey::VehicleType(_) => "vehicle type",
            RecordKey::Vehicle(_) => "vehicle",
            RecordKey::Customer(_) => "customer",
            RecordKey::Reservation(_) => "reservation",
            RecordKey::Rental(_) => "rental",
            RecordKey::Return(_) => "return",
            RecordKey::TimePeriod(_) => "time period",
        }
    }
}

/// Everything the main menu can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SearchVehicles(VehicleSearch),
    MakeReservation(ReservationRequest),
    MakeRental(RentalRequest),
    WalkInRental(WalkInRentalRequest),
    RecordReturn(ReturnRequest),
    ListBranches,
    ListCustomers,
    Insert(Record),
    Delete(RecordKey),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Vehicles(Vec<SearchResult>),
    Confirmation(i64),
    Rented(RentalReceipt),
    Returned(ReturnReceipt),
    Branches(Vec<Branch>),
    Customers(Vec<Customer>),
    Inserted(&'static str),
    Deleted(&'static str, DeleteOutcome),
    Quit,
}
