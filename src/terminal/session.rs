//! Login screen and session lifecycle

use std::io::Write;

use tracing::info;

use super::menu::run_menu;
use super::prompt::Prompt;
use crate::controllers::RentalController;
use crate::services::{LoginOutcome, LoginService};
use crate::utils::errors::AppError;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    LoginExhausted,
}

impl SessionEnd {
    /// Process exit status; exhaustion is -1 as an unsigned byte
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionEnd::Quit => 0,
            SessionEnd::LoginExhausted => 255,
        }
    }
}

/// Log in, run the menu, then close the connection.
///
/// End of input at any point is treated as quitting.
pub async fn run_session<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    login: &mut LoginService,
) -> Result<SessionEnd, AppError> {
    let connection = loop {
        let username = match prompt.read_line("Username: ")? {
            Some(username) => username,
            None => return Ok(SessionEnd::Quit),
        };
        let password = match prompt.read_secret("Password: ")? {
            Some(password) => password,
            None => return Ok(SessionEnd::Quit),
        };

        match login.login(username.trim(), &password).await {
            LoginOutcome::Connected(connection) => break connection,
            LoginOutcome::Rejected { remaining } => {
                writeln!(out, "Failed to login. {} attempt(s) left.", remaining)?;
            }
            LoginOutcome::Exhausted => {
                writeln!(out, "You have exceeded your number of allowed attempts")?;
                return Ok(SessionEnd::LoginExhausted);
            }
        }
    };

    let controller = RentalController::new(&connection);
    let result = run_menu(prompt, out, &controller).await;
    connection.close().await;
    info!("Session closed");

    result.map(|_| SessionEnd::Quit)
}
