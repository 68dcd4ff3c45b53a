//! Position fixtures for creating in-memory test data.
//!
//! The default position runs in the default fall session (`H1-F`) and is
//! taught by instructor 0. Dates mirror the session fixture so derived values
//! such as contract dates line up without extra setup.

use chrono::NaiveDate;
use entity::position;

use super::{date, session::DEFAULT_YEAR};

/// Default test position code.
pub const DEFAULT_POSITION_CODE: &str = "PHY241H1-F";

/// Default estimated hours per assignment.
pub const DEFAULT_HOURS: u32 = 60;

/// Default session index for positions.
pub const DEFAULT_SESSION_INDEX: usize = 0;

/// Creates a position entity model with default values.
///
/// # Default Values
/// - position_code: `"PHY241H1-F"`
/// - position_title: `"Physics 241"`
/// - est/ad hours: `60`
/// - est dates: `2025-09-01` to `2025-12-31`
/// - ad dates: `2025-08-01` to `2025-08-31`
/// - session_index: `0`
/// - instructor_indexes: `[0]`
///
/// # Returns
/// - `position::Model` - In-memory position entity
pub fn entity() -> position::Model {
    entity_builder().build()
}

/// Creates a position entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let position = fixture::position::entity_builder()
///     .position_code("MAT135H1-S")
///     .session_index(1)
///     .build();
/// ```
pub fn entity_builder() -> PositionEntityBuilder {
    PositionEntityBuilder::default()
}

/// Builder for creating customized position entity models.
pub struct PositionEntityBuilder {
    position_code: String,
    position_title: String,
    hours: u32,
    est_start_date: NaiveDate,
    est_end_date: NaiveDate,
    position_type: String,
    session_index: usize,
    instructor_indexes: Vec<usize>,
}

impl Default for PositionEntityBuilder {
    fn default() -> Self {
        Self {
            position_code: DEFAULT_POSITION_CODE.to_string(),
            position_title: "Physics 241".to_string(),
            hours: DEFAULT_HOURS,
            est_start_date: date(DEFAULT_YEAR, 9, 1),
            est_end_date: date(DEFAULT_YEAR, 12, 31),
            position_type: super::position_template::DEFAULT_POSITION_TYPE.to_string(),
            session_index: DEFAULT_SESSION_INDEX,
            instructor_indexes: vec![0],
        }
    }
}

impl PositionEntityBuilder {
    /// Sets the position code, including its 4-character semester suffix.
    pub fn position_code(mut self, position_code: impl Into<String>) -> Self {
        self.position_code = position_code.into();
        self
    }

    /// Sets estimated and advertised hours per assignment.
    pub fn hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the estimated start and end dates.
    pub fn est_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.est_start_date = start;
        self.est_end_date = end;
        self
    }

    /// Sets the index of the session the position runs in.
    pub fn session_index(mut self, session_index: usize) -> Self {
        self.session_index = session_index;
        self
    }

    /// Sets the indices of the instructors teaching the course.
    pub fn instructor_indexes(mut self, instructor_indexes: Vec<usize>) -> Self {
        self.instructor_indexes = instructor_indexes;
        self
    }

    /// Builds and returns the position entity model.
    pub fn build(self) -> position::Model {
        position::Model {
            position_code: self.position_code,
            position_title: self.position_title,
            est_hours_per_assignment: self.hours,
            est_start_date: self.est_start_date,
            est_end_date: self.est_end_date,
            position_type: self.position_type,
            session_index: self.session_index,
            ad_hours_per_assignment: self.hours,
            ad_num_assignments: 4,
            ad_open_date: date(DEFAULT_YEAR, 8, 1),
            ad_close_date: date(DEFAULT_YEAR, 8, 31),
            duties: "Run tutorials and mark problem sets.".to_string(),
            qualifications: "Completed a physics degree.".to_string(),
            desired_num_assignments: 4,
            current_enrollment: 300,
            current_waitlisted: 20,
            instructor_indexes: self.instructor_indexes,
        }
    }
}
