//! Vehicle rental desk
//!
//! Terminal front end for a rental business: availability search,
//! reservations, rentals, returns and table maintenance over a relational
//! database.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod services;
pub mod terminal;
pub mod utils;

pub use utils::errors::AppError;
