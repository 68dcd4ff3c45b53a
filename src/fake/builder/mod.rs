//! Per-kind fixture builders.
//!
//! Each module implements [`Fixture`](super::Fixture) for one entity model:
//! its natural key and how a candidate is derived from the records already in
//! the store.

pub mod application;
pub mod assignment;
pub mod person;
pub mod position;
pub mod position_template;
pub mod reporting_tag;
pub mod session;
pub mod wage_chunk;

/// `value`, or `None` when it is blank.
fn present(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
