use serde::{Deserialize, Serialize};

/// How strongly an application asks for a position, from 1 to 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub position_index: usize,
    pub application_index: usize,
    pub preference_level: u32,
}
