use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A position awarded to an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub note: String,
    /// Path of a hand-written offer replacing the generated one.
    pub offer_override_pdf: Option<String>,
    pub position_index: usize,
    pub applicant_index: usize,
}
