//! Business logic layer for GymDesk
//!
//! This module provides the high-level `GymDesk` API: one method per
//! operation, each running against its own short-lived connection.

pub mod desk;
pub mod members;
pub mod trainings;
pub mod payments;
pub mod activities;
pub mod employees;
pub mod forms;

pub use desk::GymDesk;
pub use forms::{ActivityForm, EmployeeForm, MemberForm, PaymentForm, TrainingForm};
