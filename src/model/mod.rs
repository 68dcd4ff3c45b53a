//! Data transfer objects handed to the persistence layer.
//!
//! Records reference each other by position inside the store. The persistence
//! boundary replaces those positions with identities: the record at index `i`
//! gets id `i + 1`, and every `*_index` field becomes the matching `*_id`.

pub mod application;
pub mod assignment;
pub mod payload;
pub mod person;
pub mod position;
pub mod session;

/// Identity of the record stored at `index`.
pub fn id(index: usize) -> usize {
    index + 1
}
