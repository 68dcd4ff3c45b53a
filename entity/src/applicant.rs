use serde::{Deserialize, Serialize};

/// A TA candidate. `utorid` identifies the person across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub utorid: String,
    pub phone: String,
    pub student_number: String,
}
