//! Position template fixtures for creating in-memory test data.

use entity::position_template;

/// Default position type.
pub const DEFAULT_POSITION_TYPE: &str = "standard";

/// Default offer template file.
pub const DEFAULT_OFFER_TEMPLATE: &str = "standard.html";

/// Default session index for position templates.
pub const DEFAULT_SESSION_INDEX: usize = 0;

/// Creates a position template entity model with default values.
///
/// # Default Values
/// - position_type: `"standard"`
/// - offer_template: `"standard.html"`
/// - session_index: `0`
pub fn entity() -> position_template::Model {
    entity_builder().build()
}

/// Creates a position template entity builder for customization.
pub fn entity_builder() -> PositionTemplateEntityBuilder {
    PositionTemplateEntityBuilder::default()
}

/// Creates an available template with the default type and file.
pub fn available() -> position_template::AvailableTemplate {
    position_template::AvailableTemplate {
        position_type: DEFAULT_POSITION_TYPE.to_string(),
        offer_template: DEFAULT_OFFER_TEMPLATE.to_string(),
    }
}

/// Builder for creating customized position template entity models.
pub struct PositionTemplateEntityBuilder {
    position_type: String,
    offer_template: String,
    session_index: usize,
}

impl Default for PositionTemplateEntityBuilder {
    fn default() -> Self {
        Self {
            position_type: DEFAULT_POSITION_TYPE.to_string(),
            offer_template: DEFAULT_OFFER_TEMPLATE.to_string(),
            session_index: DEFAULT_SESSION_INDEX,
        }
    }
}

impl PositionTemplateEntityBuilder {
    pub fn position_type(mut self, position_type: impl Into<String>) -> Self {
        self.position_type = position_type.into();
        self
    }

    pub fn offer_template(mut self, offer_template: impl Into<String>) -> Self {
        self.offer_template = offer_template.into();
        self
    }

    /// Sets the index of the session the template belongs to.
    pub fn session_index(mut self, session_index: usize) -> Self {
        self.session_index = session_index;
        self
    }

    pub fn build(self) -> position_template::Model {
        position_template::Model {
            position_type: self.position_type,
            offer_template: self.offer_template,
            session_index: self.session_index,
        }
    }
}
