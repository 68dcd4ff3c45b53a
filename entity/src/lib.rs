//! Record models for the TA-staffing fixture graph.
//!
//! Each entity kind has its own module exposing a plain `Model` struct. Records
//! reference one another by positional index into the sequence of another kind
//! held by [`store::RecordStore`]; identities only exist once a consumer
//! persists the graph.

pub mod applicant;
pub mod application;
pub mod assignment;
pub mod instructor;
pub mod kind;
pub mod position;
pub mod position_template;
pub mod preference;
pub mod prelude;
pub mod reporting_tag;
pub mod session;
pub mod store;
pub mod wage_chunk;
