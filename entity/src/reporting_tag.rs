use serde::{Deserialize, Serialize};

/// Payroll grouping label attached to a wage chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub wage_chunk_index: usize,
}
