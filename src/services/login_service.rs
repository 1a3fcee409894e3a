use tracing::{error, info, warn};

use crate::config::{DatabaseConfig, RentalConfig};
use crate::database::DatabaseConnection;

/// Result of one login attempt
#[derive(Debug)]
pub enum LoginOutcome {
    Connected(DatabaseConnection),
    Rejected { remaining: u32 },
    Exhausted,
}

/// Login with database credentials, limited to a fixed number of failures
pub struct LoginService {
    database: DatabaseConfig,
    max_attempts: u32,
    failed_attempts: u32,
}

impl LoginService {
    pub fn new(config: &RentalConfig) -> Self {
        Self {
            database: config.database.clone(),
            max_attempts: config.max_login_attempts,
            failed_attempts: 0,
        }
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn has_reached_max_attempts(&self) -> bool {
        self.failed_attempts >= self.max_attempts
    }

    /// Open the session connection with the given credentials.
    ///
    /// When the schema is to be installed and that fails, the attempt
    /// counts as a failed login.
    pub async fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        if self.has_reached_max_attempts() {
            return LoginOutcome::Exhausted;
        }

        match self.open(username, password).await {
            Some(connection) => {
                self.failed_attempts = 0;
                LoginOutcome::Connected(connection)
            }
            None => {
                self.failed_attempts += 1;
                if self.has_reached_max_attempts() {
                    warn!("Login attempts exhausted after {} failures", self.failed_attempts);
                    LoginOutcome::Exhausted
                } else {
                    LoginOutcome::Rejected {
                        remaining: self.max_attempts - self.failed_attempts,
                    }
                }
            }
        }
    }

    async fn open(&self, username: &str, password: &str) -> Option<DatabaseConnection> {
        let connection = match DatabaseConnection::connect(&self.database, username, password).await {
            Ok(connection) => connection,
            Err(e) => {
                error!("[EXCEPTION] {}", e);
                return None;
            }
        };

        if self.database.init_schema {
            if let Err(e) = connection.install_schema().await {
                error!("[EXCEPTION] {}", e);
                connection.close().await;
                return None;
            }
        }

        info!("Logged in as '{}'", username);
        Some(connection)
    }
}
