//! Row structs matching the database tables.
//!
//! Rows convert into the domain types from `roster_core`, which stay free of
//! any sqlx dependency.

pub mod employee;
