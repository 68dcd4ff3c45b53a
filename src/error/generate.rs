use std::path::PathBuf;

use entity::prelude::{DanglingReference, EntityKind};
use thiserror::Error;

/// Failures while generating a fixture batch.
///
/// None of these are recoverable by retrying with the same store: they signal
/// that the requested graph cannot be built from what has been generated so far.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A builder needs a random record of a producer kind that has none.
    ///
    /// Generate the producer kind first, with a non-zero count.
    #[error("cannot generate {kind}: {producer} has zero records")]
    EmptyProducer {
        /// Kind being generated
        kind: EntityKind,
        /// Name of the empty producer sequence
        producer: &'static str,
    },

    /// Every candidate in the retry budget collided with a record already in
    /// the batch.
    ///
    /// Occurs when the requested count exceeds the number of distinct natural
    /// keys the producers allow, e.g. more wage chunks than assignments.
    #[error(
        "generated {generated} of {requested} {kind} before exhausting {attempts} attempts on a unique record"
    )]
    Exhausted {
        kind: EntityKind,
        requested: usize,
        generated: usize,
        attempts: usize,
    },

    /// The offer template list could not be fetched.
    #[error(transparent)]
    Templates(#[from] TemplateError),

    /// A finished store references records that do not exist.
    #[error("store has {} dangling references", .0.len())]
    DanglingReferences(Vec<DanglingReference>),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    /// Reading the offer template directory failed.
    #[error("Failed to read offer templates from '{}': {source}", path.display())]
    Io {
        /// Directory or file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
