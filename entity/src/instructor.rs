use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub utorid: String,
}
