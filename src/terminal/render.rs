//! Output formatting for the menu

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};

use crate::dto::CommandOutput;
use crate::models::time_period::timestamp_key;
use crate::models::{Branch, Customer, RentalReceipt, ReturnReceipt, SearchResult};
use crate::repositories::DeleteOutcome;
use crate::utils::errors::AppError;

pub fn render_output(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Vehicles(vehicles) => render_vehicles(vehicles),
        CommandOutput::Confirmation(conf_no) => {
            format!("Reservation made. Confirmation number: {}\n", conf_no)
        }
        CommandOutput::Rented(receipt) => render_rental(receipt),
        CommandOutput::Returned(receipt) => render_return(receipt),
        CommandOutput::Branches(branches) => render_branches(branches),
        CommandOutput::Customers(customers) => render_customers(customers),
        CommandOutput::Inserted(kind) => format!("Inserted {}.\n", kind),
        CommandOutput::Deleted(kind, DeleteOutcome::Deleted(rows)) => {
            format!("Deleted {} {} row(s).\n", rows, kind)
        }
        CommandOutput::Deleted(kind, DeleteOutcome::NotFound) => {
            format!("No {} matched, nothing deleted.\n", kind)
        }
        CommandOutput::Quit => "Good Bye!\n".to_string(),
    }
}

pub fn render_error(error: &AppError) -> String {
    format!("{} {}\n", error.tag(), error)
}

/// Fixed-width two column listing, each field cut to 15 characters
pub fn render_branches(branches: &[Branch]) -> String {
    let mut out = format!("{:<15.15}{:<15.15}\n", "Location", "City");
    for branch in branches {
        out.push_str(&format!("{:<15.15}{:<15.15}\n", branch.location, branch.city));
    }
    out
}

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.iter().map(|c| Cell::new(c)));
    table
}

fn render_vehicles(vehicles: &[SearchResult]) -> String {
    if vehicles.is_empty() {
        return "No vehicles available.\n".to_string();
    }

    let mut table = table(&[
        "License", "Make", "Model", "Year", "Color", "Odometer", "Type", "Location", "City",
    ]);
    for v in vehicles {
        table.add_row(vec![
            Cell::new(&v.vlicense),
            Cell::new(&v.make),
            Cell::new(&v.model),
            Cell::new(v.year),
            Cell::new(&v.color),
            Cell::new(v.odometer),
            Cell::new(&v.vtname),
            Cell::new(&v.location),
            Cell::new(&v.city),
        ]);
    }

    format!("{}\n({} vehicles)\n", table, vehicles.len())
}

fn render_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "(0 customers)\n".to_string();
    }

    let mut table = table(&["License", "Name", "Phone", "Address"]);
    for c in customers {
        table.add_row(vec![
            Cell::new(&c.dlicense),
            Cell::new(&c.name),
            Cell::new(&c.phone_number),
            Cell::new(&c.address),
        ]);
    }

    format!("{}\n({} customers)\n", table, customers.len())
}

fn render_rental(receipt: &RentalReceipt) -> String {
    format!(
        "Rental id: {}\nConfirmation number: {}\nVehicle: {} at {}\nPeriod: {}\n",
        receipt.rid, receipt.conf_no, receipt.vlicense, receipt.location, receipt.period
    )
}

fn render_return(receipt: &ReturnReceipt) -> String {
    let charge = &receipt.charge;
    let mut out = format!(
        "Rental id: {}\nVehicle: {}\nRented: {}\nReturned: {}\n",
        receipt.rid,
        receipt.vlicense,
        receipt.period,
        timestamp_key(receipt.returned_at)
    );
    if let Some(conf_no) = receipt.conf_no {
        out.push_str(&format!("Confirmation number: {}\n", conf_no));
    }
    out.push_str(&format!(
        "{} week(s), {} day(s), {} hour(s)\n  rental    {:>10}\n  insurance {:>10}\n",
        charge.weeks, charge.days, charge.hours, charge.rental, charge.insurance
    ));
    out.push_str(&format!("{} km\n  distance  {:>10}\n", charge.km, charge.distance));
    out.push_str(&format!("Total: {}\n", charge.total));
    out.push_str(&format!(
        "Full tank: {}\n",
        if receipt.full_tank { "yes" } else { "no" }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches_are_truncated_to_fifteen() {
        let out = render_branches(&[Branch::new("A very long location name", "Vancouver")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Location       City           ");
        assert_eq!(lines[1], "A very long locVancouver      ");
    }

    #[test]
    fn test_delete_outcomes() {
        assert_eq!(
            render_output(&CommandOutput::Deleted("branch", DeleteOutcome::NotFound)),
            "No branch matched, nothing deleted.\n"
        );
        assert_eq!(
            render_output(&CommandOutput::Deleted("vehicle", DeleteOutcome::Deleted(1))),
            "Deleted 1 vehicle row(s).\n"
        );
    }

    #[test]
    fn test_error_is_tagged() {
        let error = AppError::NotFound("Reservation 9 does not exist".to_string());
        assert_eq!(
            render_error(&error),
            "[ERROR] Not found: Reservation 9 does not exist\n"
        );
    }

    #[test]
    fn test_empty_search() {
        assert_eq!(
            render_output(&CommandOutput::Vehicles(Vec::new())),
            "No vehicles available.\n"
        );
    }
}
