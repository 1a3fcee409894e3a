//! Input forms
//!
//! Each form asks for the fields of one request or record, one line per
//! field, and parses them into the types the dispatcher takes. A field that
//! does not parse aborts the form with `BadRequest`.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use super::prompt::Prompt;
use crate::dto::{
    Record, RecordKey, RentalRequest, ReservationRequest, ReturnRequest, WalkInRentalRequest,
};
use crate::models::{
    Branch, Customer, PaymentCard, Rental, Reservation, ReturnRecord, TimePeriod, Vehicle,
    VehicleSearch, VehicleStatus, VehicleType,
};
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_not_empty, validate_time};

/// Tables reachable from the insert and delete submenus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Branch,
    VehicleType,
    Vehicle,
    Customer,
    Reservation,
    Rental,
    Return,
    TimePeriod,
}

impl RecordKind {
    pub const ALL: [RecordKind; 8] = [
        RecordKind::Branch,
        RecordKind::VehicleType,
        RecordKind::Vehicle,
        RecordKind::Customer,
        RecordKind::Reservation,
        RecordKind::Rental,
        RecordKind::Return,
        RecordKind::TimePeriod,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Branch => "Branch",
            RecordKind::VehicleType => "Vehicle type",
            RecordKind::Vehicle => "Vehicle",
            RecordKind::Customer => "Customer",
            RecordKind::Reservation => "Reservation",
            RecordKind::Rental => "Rental",
            RecordKind::Return => "Return",
            RecordKind::TimePeriod => "Time period",
        }
    }

    /// Submenu entries are numbered from 1
    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

fn invalid(label: &str, reason: impl AsRef<str>) -> AppError {
    AppError::BadRequest(format!("{}: {}", label, reason.as_ref()))
}

pub struct Form<'a, P: Prompt> {
    prompt: &'a mut P,
}

impl<'a, P: Prompt> Form<'a, P> {
    pub fn new(prompt: &'a mut P) -> Self {
        Self { prompt }
    }

    fn raw(&mut self, label: &str) -> Result<String, AppError> {
        match self.prompt.read_line(&format!("{}: ", label))? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(AppError::InputEnded),
        }
    }

    pub fn optional(&mut self, label: &str) -> Result<Option<String>, AppError> {
        let value = self.raw(label)?;
        Ok((!value.is_empty()).then_some(value))
    }

    pub fn text(&mut self, label: &str) -> Result<String, AppError> {
        let value = self.raw(label)?;
        validate_not_empty(&value).map_err(|_| invalid(label, "a value is required"))?;
        Ok(value)
    }

    pub fn integer(&mut self, label: &str) -> Result<i64, AppError> {
        let value = self.text(label)?;
        value
            .parse()
            .map_err(|_| invalid(label, format!("'{}' is not a whole number", value)))
    }

    pub fn amount(&mut self, label: &str) -> Result<f64, AppError> {
        let value = self.text(label)?;
        value
            .parse()
            .map_err(|_| invalid(label, format!("'{}' is not a number", value)))
    }

    pub fn money(&mut self, label: &str) -> Result<Decimal, AppError> {
        let value = self.text(label)?;
        Decimal::from_str(value.trim())
            .map_err(|_| invalid(label, format!("'{}' is not an amount", value)))
    }

    pub fn date(&mut self, label: &str) -> Result<NaiveDate, AppError> {
        let value = self.text(label)?;
        validate_date(&value).map_err(|_| invalid(label, format!("'{}' is not YYYY-MM-DD", value)))
    }

    pub fn time(&mut self, label: &str) -> Result<NaiveTime, AppError> {
        let value = self.text(label)?;
        validate_time(&value).map_err(|_| invalid(label, format!("'{}' is not HH:MM[:SS]", value)))
    }

    pub fn yes_no(&mut self, label: &str) -> Result<bool, AppError> {
        let value = self.text(&format!("{} (y/n)", label))?;
        match value.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(invalid(label, format!("'{}' is not y or n", value))),
        }
    }

    pub fn period(&mut self) -> Result<TimePeriod, AppError> {
        let from_date = self.date("From date (YYYY-MM-DD)")?;
        self.period_from(from_date)
    }

    /// A window, or `None` when the start date is left blank
    pub fn optional_period(&mut self) -> Result<Option<TimePeriod>, AppError> {
        let label = "From date (YYYY-MM-DD, blank for now)";
        match self.optional(label)? {
            None => Ok(None),
            Some(value) => {
                let from_date = validate_date(&value)
                    .map_err(|_| invalid(label, format!("'{}' is not YYYY-MM-DD", value)))?;
                self.period_from(from_date).map(Some)
            }
        }
    }

    fn period_from(&mut self, from_date: NaiveDate) -> Result<TimePeriod, AppError> {
        let from_time = self.time("From time (HH:MM)")?;
        let to_date = self.date("To date (YYYY-MM-DD)")?;
        let to_time = self.time("To time (HH:MM)")?;
        Ok(TimePeriod::new(from_date, from_time, to_date, to_time))
    }

    pub fn search(&mut self) -> Result<VehicleSearch, AppError> {
        Ok(VehicleSearch {
            vehicle_type: self.optional("Vehicle type (blank for any)")?,
            location: self.optional("Location (blank for any)")?,
            period: self.optional_period()?,
        })
    }

    pub fn customer(&mut self) -> Result<Customer, AppError> {
        Ok(Customer {
            dlicense: self.text("Driver's license")?,
            name: self.text("Name")?,
            phone_number: self.text("Phone number")?,
            address: self.text("Address")?,
        })
    }

    pub fn card(&mut self) -> Result<PaymentCard, AppError> {
        Ok(PaymentCard {
            card_name: self.text("Card name")?,
            card_no: self.text("Card number")?,
            exp_date: self.date("Card expiry (YYYY-MM-DD)")?,
        })
    }

    pub fn reservation_request(&mut self) -> Result<ReservationRequest, AppError> {
        let customer = self.customer()?;
        let location = self.text("Location")?;
        let vtname = self.text("Vehicle type")?;
        let period = self.period()?;

        Ok(ReservationRequest {
            customer,
            location,
            vtname,
            period,
        })
    }

    pub fn rental_request(&mut self) -> Result<RentalRequest, AppError> {
        Ok(RentalRequest {
            conf_no: self.integer("Confirmation number")?,
            location: self.text("Location")?,
            card: self.card()?,
        })
    }

    pub fn walk_in_request(&mut self) -> Result<WalkInRentalRequest, AppError> {
        Ok(WalkInRentalRequest {
            reservation: self.reservation_request()?,
            card: self.card()?,
        })
    }

    pub fn return_request(&mut self) -> Result<ReturnRequest, AppError> {
        Ok(ReturnRequest {
            rid: self.integer("Rental id")?,
            return_date: self.date("Return date (YYYY-MM-DD)")?,
            return_time: self.time("Return time (HH:MM)")?,
            odometer: self.integer("Odometer")?,
            full_tank: self.yes_no("Full tank")?,
        })
    }

    /// Every column of a new row
    pub fn record(&mut self, kind: RecordKind) -> Result<Record, AppError> {
        let record = match kind {
            RecordKind::Branch => Record::Branch(self.branch()?),
            RecordKind::VehicleType => Record::VehicleType(VehicleType {
                vtname: self.text("Vehicle type")?,
                features: self.optional("Features")?.unwrap_or_default(),
                wrate: self.amount("Weekly rate")?,
                drate: self.amount("Daily rate")?,
                hrate: self.amount("Hourly rate")?,
                wirate: self.amount("Weekly insurance rate")?,
                dirate: self.amount("Daily insurance rate")?,
                hirate: self.amount("Hourly insurance rate")?,
                krate: self.amount("Rate per km")?,
            }),
            RecordKind::Vehicle => Record::Vehicle(self.vehicle()?),
            RecordKind::Customer => Record::Customer(self.customer()?),
            RecordKind::Reservation => Record::Reservation(Reservation {
                conf_no: self.integer("Confirmation number")?,
                vtname: self.text("Vehicle type")?,
                dlicense: self.text("Driver's license")?,
                period: self.period()?,
            }),
            RecordKind::Rental => Record::Rental(Rental {
                rid: self.integer("Rental id")?,
                vlicense: self.text("Vehicle license")?,
                dlicense: self.text("Driver's license")?,
                period: self.period()?,
                odometer: self.integer("Odometer")?,
                card: self.card()?,
                conf_no: match self.optional("Confirmation number (blank for none)")? {
                    Some(value) => Some(value.parse().map_err(|_| {
                        invalid("Confirmation number", format!("'{}' is not a whole number", value))
                    })?),
                    None => None,
                },
            }),
            RecordKind::Return => Record::Return(ReturnRecord {
                rid: self.integer("Rental id")?,
                return_date: self.date("Return date (YYYY-MM-DD)")?,
                return_time: self.time("Return time (HH:MM)")?,
                odometer: self.integer("Odometer")?,
                full_tank: self.yes_no("Full tank")?,
                charge: self.money("Charge")?,
            }),
            RecordKind::TimePeriod => Record::TimePeriod(self.period()?),
        };
        Ok(record)
    }

    /// Only the columns a delete matches on
    pub fn record_key(&mut self, kind: RecordKind) -> Result<RecordKey, AppError> {
        let key = match kind {
            RecordKind::Branch => RecordKey::Branch(self.branch()?),
            RecordKind::VehicleType => RecordKey::VehicleType(self.text("Vehicle type")?),
            RecordKind::Vehicle => RecordKey::Vehicle(self.text("Vehicle license")?),
            RecordKind::Customer => RecordKey::Customer(self.text("Driver's license")?),
            RecordKind::Reservation => RecordKey::Reservation(self.integer("Confirmation number")?),
            RecordKind::Rental => RecordKey::Rental(self.integer("Rental id")?),
            RecordKind::Return => RecordKey::Return(self.integer("Rental id")?),
            RecordKind::TimePeriod => RecordKey::TimePeriod(self.period()?),
        };
        Ok(key)
    }

    fn branch(&mut self) -> Result<Branch, AppError> {
        Ok(Branch::new(self.text("Location")?, self.text("City")?))
    }

    fn vehicle(&mut self) -> Result<Vehicle, AppError> {
        let vlicense = self.text("Vehicle license")?;
        let make = self.text("Make")?;
        let model = self.text("Model")?;
        let year = self.integer("Year")?;
        let color = self.text("Color")?;
        let odometer = self.integer("Odometer")?;
        let status = match self.optional("Status (available/rented/maintenance, blank for available)")? {
            None => VehicleStatus::Available,
            Some(value) => VehicleStatus::parse(&value)
                .ok_or_else(|| invalid("Status", format!("unknown status '{}'", value)))?,
        };

        Ok(Vehicle {
            vlicense,
            make,
            model,
            year,
            color,
            odometer,
            status: status.as_str().to_string(),
            vtname: self.text("Vehicle type")?,
            location: self.text("Location")?,
            city: self.text("City")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::prompt::ScriptedPrompt;

    #[test]
    fn test_blank_search_has_no_filters() {
        let mut prompt = ScriptedPrompt::new(["", "", ""]);
        let search = Form::new(&mut prompt).search().unwrap();
        assert_eq!(search, VehicleSearch::new());
    }

    #[test]
    fn test_search_with_window() {
        let mut prompt = ScriptedPrompt::new([
            "SUV",
            "Vancouver",
            "2024-06-01",
            "09:00",
            "2024-06-03",
            "17:30",
        ]);
        let search = Form::new(&mut prompt).search().unwrap();

        assert_eq!(search.vehicle_type.as_deref(), Some("SUV"));
        assert_eq!(search.location.as_deref(), Some("Vancouver"));
        let period = search.period.unwrap();
        assert_eq!(period.start_key(), "2024-06-01 09:00:00");
        assert_eq!(period.end_key(), "2024-06-03 17:30:00");
    }

    #[test]
    fn test_bad_date_is_bad_request() {
        let mut prompt = ScriptedPrompt::new(["7", "2024/06/01"]);
        let result = Form::new(&mut prompt).return_request();
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_end_of_input_ends_form() {
        let mut prompt = ScriptedPrompt::new(["Main St"]);
        let result = Form::new(&mut prompt).record(RecordKind::Branch);
        assert!(matches!(result, Err(AppError::InputEnded)));
    }

    #[test]
    fn test_delete_key_reads_only_key_columns() {
        let mut prompt = ScriptedPrompt::new(["ABC123", "left over"]);
        let key = Form::new(&mut prompt).record_key(RecordKind::Vehicle).unwrap();
        assert_eq!(key, RecordKey::Vehicle("ABC123".to_string()));
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn test_record_kind_from_choice() {
        assert_eq!(RecordKind::from_choice("1"), Some(RecordKind::Branch));
        assert_eq!(RecordKind::from_choice(" 8 "), Some(RecordKind::TimePeriod));
        assert_eq!(RecordKind::from_choice("0"), None);
        assert_eq!(RecordKind::from_choice("9"), None);
        assert_eq!(RecordKind::from_choice("x"), None);
    }

    #[test]
    fn test_return_charge_is_read_exactly() {
        let mut prompt =
            ScriptedPrompt::new(["4", "2024-06-05", "10:00", "10500", "y", "1150.10"]);
        let record = Form::new(&mut prompt).record(RecordKind::Return).unwrap();
        let Record::Return(record) = record else {
            panic!("expected a return record");
        };
        assert_eq!(record.charge, Decimal::new(115010, 2));
        assert_eq!(record.charge.to_string(), "1150.10");
    }

    #[test]
    fn test_bad_charge_is_bad_request() {
        let mut prompt = ScriptedPrompt::new(["4", "2024-06-05", "10:00", "10500", "y", "lots"]);
        let result = Form::new(&mut prompt).record(RecordKind::Return);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
