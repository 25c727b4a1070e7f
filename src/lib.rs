//! # GymDesk Core
//!
//! Record keeping for a small gym's front desk, stored in a single SQLite file.
//!
//! ## Features
//!
//! - Members with unique document ids
//! - Training plans, payments and activity history per member
//! - Staff accounts with hashed passwords and login checks
//! - Validation of text form input before it reaches the database
//! - Deleting a member removes its trainings, payments and history
//!
//! ## Example
//!
//! ```no_run
//! use gymdesk::{GymDesk, MemberForm};
//! use std::path::Path;
//!
//! let desk = GymDesk::open_path(Path::new("academia.db")).unwrap();
//! assert!(desk.authenticate("admin", "admin").unwrap());
//!
//! let form = MemberForm {
//!     name: "Ana Souza".to_string(),
//!     document: "111.222.333-44".to_string(),
//!     ..Default::default()
//! };
//! desk.create_member(&form.validate().unwrap()).unwrap();
//!
//! for member in desk.list_members().unwrap() {
//!     println!("{}: {}", member.id, member.name);
//! }
//! ```

pub mod crypto;
pub mod database;
pub mod business;
pub mod config;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{DeskError, Result};
pub use config::DeskConfig;
pub use database::models::{
    ActivityRecord, Employee, Member, MemberUpdate, NewActivity, NewEmployee, NewMember,
    NewPayment, NewTraining, Payment, Training,
};
pub use business::{ActivityForm, EmployeeForm, GymDesk, MemberForm, PaymentForm, TrainingForm};

/// Default database filename
pub const DATABASE_FILENAME: &str = "academia.db";

/// Environment variable overriding the database path
pub const DB_PATH_ENV: &str = "GYMDESK_DB_PATH";

/// Login of the account created on an empty store
pub const DEFAULT_ADMIN_LOGIN: &str = "admin";

/// Password of the account created on an empty store
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Name and role of the account created on an empty store
pub const DEFAULT_ADMIN_NAME: &str = "Administrator";
