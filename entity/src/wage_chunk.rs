use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sub-interval of an assignment paid at a single hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours: u32,
    pub rate: f64,
    pub assignment_index: usize,
}
