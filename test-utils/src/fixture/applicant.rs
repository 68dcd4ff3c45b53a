//! Applicant fixtures for creating in-memory test data.

use entity::applicant;

/// Default applicant UTORid.
pub const DEFAULT_UTORID: &str = "lovada42";

/// Default applicant student number.
pub const DEFAULT_STUDENT_NUMBER: &str = "1001234567";

/// Creates an applicant entity model with default values.
///
/// # Default Values
/// - first_name: `"Ada"`
/// - last_name: `"Lovelace"`
/// - email: `"lovada42@example.com"`
/// - utorid: `"lovada42"`
/// - phone: `"(416) 555-0100"`
/// - student_number: `"1001234567"`
pub fn entity() -> applicant::Model {
    entity_builder().build()
}

/// Creates an applicant entity builder for customization.
pub fn entity_builder() -> ApplicantEntityBuilder {
    ApplicantEntityBuilder::default()
}

/// Builder for creating customized applicant entity models.
pub struct ApplicantEntityBuilder {
    first_name: String,
    last_name: String,
    utorid: String,
    phone: String,
    student_number: String,
}

impl Default for ApplicantEntityBuilder {
    fn default() -> Self {
        Self {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            utorid: DEFAULT_UTORID.to_string(),
            phone: "(416) 555-0100".to_string(),
            student_number: DEFAULT_STUDENT_NUMBER.to_string(),
        }
    }
}

impl ApplicantEntityBuilder {
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the UTORid. The email is derived from it on `build()`.
    pub fn utorid(mut self, utorid: impl Into<String>) -> Self {
        self.utorid = utorid.into();
        self
    }

    pub fn student_number(mut self, student_number: impl Into<String>) -> Self {
        self.student_number = student_number.into();
        self
    }

    pub fn build(self) -> applicant::Model {
        applicant::Model {
            email: format!("{}@example.com", self.utorid),
            first_name: self.first_name,
            last_name: self.last_name,
            utorid: self.utorid,
            phone: self.phone,
            student_number: self.student_number,
        }
    }
}
