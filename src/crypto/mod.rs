//! Password hashing for staff accounts
//!
//! Passwords are stored as the unsalted hex SHA-256 of their UTF-8 bytes,
//! which keeps existing `academia.db` employee rows usable.

mod sha256;

pub use sha256::{hash_password, sha256_hex, verify_password};
