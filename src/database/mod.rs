//! Database module
//!
//! Connection lifecycle and schema for the rental database.

pub mod connection;
pub mod schema;

pub use connection::DatabaseConnection;
pub use schema::Dialect;
