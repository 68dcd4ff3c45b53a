//! Instructor fixtures for creating in-memory test data.

use entity::instructor;

/// Default instructor first name.
pub const DEFAULT_FIRST_NAME: &str = "Grace";

/// Default instructor last name.
pub const DEFAULT_LAST_NAME: &str = "Hopper";

/// Default instructor UTORid.
pub const DEFAULT_UTORID: &str = "hopgra01";

/// Creates an instructor entity model with default values.
///
/// # Default Values
/// - first_name: `"Grace"`
/// - last_name: `"Hopper"`
/// - email: `"gracehopper@example.com"`
/// - utorid: `"hopgra01"`
pub fn entity() -> instructor::Model {
    entity_builder().build()
}

/// Creates an instructor entity builder for customization.
pub fn entity_builder() -> InstructorEntityBuilder {
    InstructorEntityBuilder::default()
}

/// Builder for creating customized instructor entity models.
pub struct InstructorEntityBuilder {
    first_name: String,
    last_name: String,
    email: String,
    utorid: String,
}

impl Default for InstructorEntityBuilder {
    fn default() -> Self {
        Self {
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: "gracehopper@example.com".to_string(),
            utorid: DEFAULT_UTORID.to_string(),
        }
    }
}

impl InstructorEntityBuilder {
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the UTORid, which must be unique among instructors.
    pub fn utorid(mut self, utorid: impl Into<String>) -> Self {
        self.utorid = utorid.into();
        self
    }

    pub fn build(self) -> instructor::Model {
        instructor::Model {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            utorid: self.utorid,
        }
    }
}
