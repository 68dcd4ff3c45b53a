//! Assignment fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::assignment;

use super::{date, session::DEFAULT_YEAR};

/// Creates an assignment entity model of applicant 0 to position 0.
///
/// Contract dates match the default position: `2025-09-01` to `2025-12-31`.
pub fn entity() -> assignment::Model {
    entity_builder().build()
}

/// Creates an assignment entity builder for customization.
pub fn entity_builder() -> AssignmentEntityBuilder {
    AssignmentEntityBuilder::default()
}

/// Builder for creating customized assignment entity models.
pub struct AssignmentEntityBuilder {
    contract_start: NaiveDate,
    contract_end: NaiveDate,
    position_index: usize,
    applicant_index: usize,
}

impl Default for AssignmentEntityBuilder {
    fn default() -> Self {
        Self {
            contract_start: date(DEFAULT_YEAR, 9, 1),
            contract_end: date(DEFAULT_YEAR, 12, 31),
            position_index: 0,
            applicant_index: 0,
        }
    }
}

impl AssignmentEntityBuilder {
    /// Sets the contract dates.
    pub fn contract(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.contract_start = start;
        self.contract_end = end;
        self
    }

    pub fn position_index(mut self, position_index: usize) -> Self {
        self.position_index = position_index;
        self
    }

    pub fn applicant_index(mut self, applicant_index: usize) -> Self {
        self.applicant_index = applicant_index;
        self
    }

    pub fn build(self) -> assignment::Model {
        assignment::Model {
            contract_start: self.contract_start,
            contract_end: self.contract_end,
            note: String::new(),
            offer_override_pdf: None,
            position_index: self.position_index,
            applicant_index: self.applicant_index,
        }
    }
}
