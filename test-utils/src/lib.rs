//! TAPP Test Utils
//!
//! Provides shared testing utilities for the fixture generator and its
//! consumers. This crate offers in-memory record fixtures with sensible
//! defaults and a builder for assembling referentially valid record stores.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for assembling a `RecordStore`
//! - **fixture**: Default entity models and per-entity builders
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[test]
//! fn wage_chunks_follow_session_rate() -> Result<(), TestError> {
//!     let store = TestBuilder::new()
//!         .with_session(fixture::session::entity_builder().rate2(Some(60.0)).build())
//!         .with_staffing(0)
//!         .build()?;
//!
//!     // Generate wage chunks against `store`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod fixture;
