use serde::{Deserialize, Serialize};

/// An applicant's submission to one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub comments: String,
    pub program: String,
    pub department: String,
    pub previous_uoft_ta_experience: String,
    /// Year in program.
    pub yip: u32,
    pub annotation: String,
    pub session_index: usize,
    pub applicant_index: usize,
}
