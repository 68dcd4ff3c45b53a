//! TA position records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A TA job posting within a session.
///
/// The `est_*` fields describe the planned staffing, the `ad_*` fields what is
/// advertised to applicants, and the enrollment fields feed matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub position_code: String,
    pub position_title: String,
    pub est_hours_per_assignment: u32,
    pub est_start_date: NaiveDate,
    pub est_end_date: NaiveDate,
    pub position_type: String,
    pub session_index: usize,
    pub ad_hours_per_assignment: u32,
    pub ad_num_assignments: u32,
    pub ad_open_date: NaiveDate,
    pub ad_close_date: NaiveDate,
    pub duties: String,
    pub qualifications: String,
    pub desired_num_assignments: u32,
    pub current_enrollment: u32,
    pub current_waitlisted: u32,
    pub instructor_indexes: Vec<usize>,
}

/// Length of the semester-type suffix ending every position code, e.g. `"H1-F"`.
pub const SEMESTER_SUFFIX_LEN: usize = 4;

impl Model {
    /// Position code without its semester-type suffix, e.g. `"MAT135"` for
    /// `"MAT135H1-F"`.
    pub fn course_code(&self) -> String {
        let chars = self.position_code.chars().count();
        self.position_code
            .chars()
            .take(chars.saturating_sub(SEMESTER_SUFFIX_LEN))
            .collect()
    }
}
