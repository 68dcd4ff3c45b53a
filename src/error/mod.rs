//! Error types for configuration, fixture generation and output.
//!
//! `AppError` is the top-level error returned by the binary. It wraps the
//! domain-specific errors through `#[from]` so call sites can use `?` freely.

pub mod config;
pub mod generate;

use thiserror::Error;

pub use self::{
    config::ConfigError,
    generate::{GenerateError, TemplateError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading the environment.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Fixture generation failed.
    ///
    /// Carries the precondition or exhaustion failure reported by the generator.
    #[error(transparent)]
    GenerateErr(#[from] GenerateError),

    /// Writing the payload failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Serializing the payload failed.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}
