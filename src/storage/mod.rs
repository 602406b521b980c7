//! Storage Layer
//!
//! SQLite record store and JSON configuration file.

pub mod config;
pub mod database;

pub use config::ConfigService;
pub use database::Database;
