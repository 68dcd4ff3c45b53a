use serde::{Deserialize, Serialize};

/// Offer-letter template bound to a position type within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub position_type: String,
    pub offer_template: String,
    pub session_index: usize,
}

/// Offer template known to the system, independent of any session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTemplate {
    pub position_type: String,
    pub offer_template: String,
}
