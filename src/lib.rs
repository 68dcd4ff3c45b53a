//! Fake fixture graphs for the TA staffing application.
//!
//! [`fake`] builds internally consistent batches of sessions, positions,
//! applicants, assignments and their dependents. [`service::seed`] runs a whole
//! plan of batches in dependency order, and [`model`] turns the result into the
//! payload handed to persistence.

pub mod config;
pub mod error;
pub mod fake;
pub mod model;
pub mod service;
