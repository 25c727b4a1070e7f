//! Database layer for GymDesk
//!
//! Handles SQLite database operations including:
//! - Idempotent schema creation
//! - Per-call connection scoping
//! - One query function per statement for members, trainings, payments,
//!   activity history and employees

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
