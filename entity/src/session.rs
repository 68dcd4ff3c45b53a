//! Academic term records and the cursor that sequences them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An academic term with its pay rates.
///
/// `rate2` is only present for two-term sessions; consumers averaging rates
/// should use [`Model::effective_rate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rate1: f64,
    pub rate2: Option<f64>,
}

impl Model {
    /// Hourly rate paid for work in this session.
    ///
    /// The mean of both rates when the session has two, otherwise `rate1`.
    pub fn effective_rate(&self) -> f64 {
        match self.rate2 {
            Some(rate2) => (self.rate1 + rate2) / 2.0,
            None => self.rate1,
        }
    }
}

/// Position in the repeating Fall, Winter, Summer, Fall-Winter term cycle.
///
/// `ordinal` counts sessions generated so far against this store; the term is
/// `ordinal % 4`. `year` is the academic year of the next Fall, Winter or
/// Summer term and advances whenever a Fall-Winter term is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub ordinal: u32,
    pub year: i32,
}

impl Cursor {
    pub fn new(year: i32) -> Self {
        Self { ordinal: 0, year }
    }
}
