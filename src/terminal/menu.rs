//! Main menu loop

use std::io::Write;

use tracing::debug;

use super::forms::{Form, RecordKind};
use super::prompt::Prompt;
use super::render::{render_error, render_output};
use crate::controllers::RentalController;
use crate::dto::{Command, CommandOutput};
use crate::utils::errors::AppError;

const MAIN_MENU: [&str; 10] = [
    "Search available vehicles",
    "Make a reservation",
    "Rent a reserved vehicle",
    "Rent without a reservation",
    "Return a vehicle",
    "Show branches",
    "Show customers",
    "Insert a record",
    "Delete a record",
    "Quit",
];

fn print_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out)?;
    writeln!(out, "Please choose one of the following options:")?;
    for (i, entry) in MAIN_MENU.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry)?;
    }
    Ok(())
}

fn print_record_menu<W: Write>(out: &mut W, action: &str) -> Result<(), AppError> {
    writeln!(out, "Which kind of record do you want to {}?", action)?;
    for (i, kind) in RecordKind::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, kind.label())?;
    }
    Ok(())
}

/// Print a failed command, or hand it back when the session cannot go on
fn report<W: Write>(out: &mut W, error: AppError) -> Result<(), AppError> {
    if error.ends_session() {
        return Err(error);
    }
    write!(out, "{}", render_error(&error))?;
    Ok(())
}

/// Read the command for one menu choice; `None` for an unknown choice
fn read_command<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    choice: &str,
) -> Result<Option<Command>, AppError> {
    let command = match choice {
        "1" => Command::SearchVehicles(Form::new(prompt).search()?),
        "2" => Command::MakeReservation(Form::new(prompt).reservation_request()?),
        "3" => Command::MakeRental(Form::new(prompt).rental_request()?),
        "4" => Command::WalkInRental(Form::new(prompt).walk_in_request()?),
        "5" => Command::RecordReturn(Form::new(prompt).return_request()?),
        "6" => Command::ListBranches,
        "7" => Command::ListCustomers,
        "8" => match read_record_kind(prompt, out, "insert")? {
            Some(kind) => Command::Insert(Form::new(prompt).record(kind)?),
            None => return Ok(None),
        },
        "9" => match read_record_kind(prompt, out, "delete")? {
            Some(kind) => Command::Delete(Form::new(prompt).record_key(kind)?),
            None => return Ok(None),
        },
        "10" => Command::Quit,
        other => {
            writeln!(out, "{} is not a valid option.", other)?;
            return Ok(None);
        }
    };
    Ok(Some(command))
}

fn read_record_kind<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    action: &str,
) -> Result<Option<RecordKind>, AppError> {
    print_record_menu(out, action)?;
    let choice = prompt.read_line("Record: ")?.ok_or(AppError::InputEnded)?;
    let kind = RecordKind::from_choice(&choice);
    if kind.is_none() {
        writeln!(out, "{} is not a valid record kind.", choice.trim())?;
    }
    Ok(kind)
}

/// Run menu commands until the clerk quits or input ends.
///
/// Failed commands are printed and the menu is shown again.
pub async fn run_menu<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    controller: &RentalController,
) -> Result<(), AppError> {
    loop {
        print_menu(out)?;
        let choice = match prompt.read_line("Choose one of the above options: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        let command = match read_command(prompt, out, choice.trim()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(AppError::InputEnded) => return Ok(()),
            Err(e) => {
                report(out, e)?;
                continue;
            }
        };
        debug!("Menu choice {} read", choice.trim());

        match controller.dispatch(command).await {
            Ok(CommandOutput::Quit) => {
                write!(out, "{}", render_output(&CommandOutput::Quit))?;
                return Ok(());
            }
            Ok(output) => write!(out, "{}", render_output(&output))?,
            Err(e) => report(out, e)?,
        }
        out.flush()?;
    }
}
