//! Domain layer for the employee roster.
//!
//! Holds everything that does not need a database or an HTTP stack: the
//! record types, the request validator shared by server and client, the
//! store-level schema, the [`store::EmployeeStore`] seam and the
//! [`service::EmployeeService`] built on top of it.

pub mod employee;
pub mod envelope;
pub mod error;
pub mod schema;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
