//! Application fixtures for creating in-memory test data.

use entity::application;

/// Creates an application entity model for applicant 0 in session 0.
pub fn entity() -> application::Model {
    entity_builder().build()
}

/// Creates an application entity builder for customization.
pub fn entity_builder() -> ApplicationEntityBuilder {
    ApplicationEntityBuilder::default()
}

/// Builder for creating customized application entity models.
#[derive(Default)]
pub struct ApplicationEntityBuilder {
    session_index: usize,
    applicant_index: usize,
}

impl ApplicationEntityBuilder {
    pub fn session_index(mut self, session_index: usize) -> Self {
        self.session_index = session_index;
        self
    }

    pub fn applicant_index(mut self, applicant_index: usize) -> Self {
        self.applicant_index = applicant_index;
        self
    }

    pub fn build(self) -> application::Model {
        application::Model {
            comments: "Available all term.".to_string(),
            program: "PhD".to_string(),
            department: "Physics".to_string(),
            previous_uoft_ta_experience: "Two terms of PHY131.".to_string(),
            yip: 2,
            annotation: String::new(),
            session_index: self.session_index,
            applicant_index: self.applicant_index,
        }
    }
}
