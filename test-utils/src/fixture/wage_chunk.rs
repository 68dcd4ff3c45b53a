//! Wage chunk fixtures for creating in-memory test data.

use entity::wage_chunk;

use super::{date, position::DEFAULT_HOURS, session::DEFAULT_RATE1, session::DEFAULT_YEAR};

/// Creates a wage chunk entity model covering assignment 0.
pub fn entity() -> wage_chunk::Model {
    entity_builder().build()
}

/// Creates a wage chunk entity builder for customization.
pub fn entity_builder() -> WageChunkEntityBuilder {
    WageChunkEntityBuilder::default()
}

/// Builder for creating customized wage chunk entity models.
pub struct WageChunkEntityBuilder {
    rate: f64,
    assignment_index: usize,
}

impl Default for WageChunkEntityBuilder {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE1,
            assignment_index: 0,
        }
    }
}

impl WageChunkEntityBuilder {
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn assignment_index(mut self, assignment_index: usize) -> Self {
        self.assignment_index = assignment_index;
        self
    }

    pub fn build(self) -> wage_chunk::Model {
        wage_chunk::Model {
            start_date: date(DEFAULT_YEAR, 9, 1),
            end_date: date(DEFAULT_YEAR, 12, 31),
            hours: DEFAULT_HOURS,
            rate: self.rate,
            assignment_index: self.assignment_index,
        }
    }
}
