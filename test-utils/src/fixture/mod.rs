//! Test fixtures providing reusable record models.
//!
//! This module contains fixture functions that create in-memory records for
//! use in unit tests and as building blocks for [`TestBuilder`]. Fixtures hold
//! fixed, readable defaults so assertions can refer to the `DEFAULT_*`
//! constants instead of repeating literals.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Default fall session
//! let session = fixture::session::entity();
//!
//! // Two-rate session starting in September 2025
//! let session = fixture::session::entity_builder()
//!     .rate1(50.0)
//!     .rate2(Some(60.0))
//!     .build();
//! ```
//!
//! [`TestBuilder`]: crate::builder::TestBuilder

pub mod applicant;
pub mod application;
pub mod assignment;
pub mod instructor;
pub mod position;
pub mod position_template;
pub mod session;
pub mod wage_chunk;

pub use applicant::{entity as applicant_entity, entity_builder as applicant_entity_builder};
pub use application::{
    entity as application_entity, entity_builder as application_entity_builder,
};
pub use assignment::{entity as assignment_entity, entity_builder as assignment_entity_builder};
pub use instructor::{entity as instructor_entity, entity_builder as instructor_entity_builder};
pub use position::{entity as position_entity, entity_builder as position_entity_builder};
pub use position_template::{
    entity as position_template_entity, entity_builder as position_template_entity_builder,
};
pub use session::{entity as session_entity, entity_builder as session_entity_builder};
pub use wage_chunk::{entity as wage_chunk_entity, entity_builder as wage_chunk_entity_builder};

use chrono::NaiveDate;

/// Calendar date for fixture defaults.
///
/// Fixture dates are literals, so an invalid one is a bug in the fixture.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
