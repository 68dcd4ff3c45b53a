use entity::prelude::DanglingReference;
use thiserror::Error;

/// Errors that can occur while setting up test data.
#[derive(Error, Debug)]
pub enum TestError {
    /// The assembled store references records that were never added.
    ///
    /// Add producer records before the records that point at them, or fix the
    /// index passed to the fixture builder.
    #[error("test store has {} dangling references, first: {}", .0.len(), .0.first().map(ToString::to_string).unwrap_or_default())]
    DanglingReferences(Vec<DanglingReference>),
}
