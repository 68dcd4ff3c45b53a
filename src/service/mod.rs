//! Service layer orchestrating fixture generation.
//!
//! Services sit between the binary and the generator. They decide which kinds
//! are generated, in which order and how many, and check the finished store
//! before it leaves the application.

pub mod seed;
