//! Session fixtures for creating in-memory test data.
//!
//! The default session is a single-rate fall term. Use the builder to model
//! winter or two-rate terms when testing semester codes and rate averaging.

use chrono::NaiveDate;
use entity::session;

use super::date;

/// Default test session name.
pub const DEFAULT_NAME: &str = "2025 Fall";

/// Default test session year.
pub const DEFAULT_YEAR: i32 = 2025;

/// Default first pay rate.
pub const DEFAULT_RATE1: f64 = 50.0;

/// Default second pay rate (None).
pub const DEFAULT_RATE2: Option<f64> = None;

/// Creates a session entity model with default values.
///
/// # Default Values
/// - name: `"2025 Fall"`
/// - start_date: `2025-09-01`
/// - end_date: `2025-12-31`
/// - rate1: `50.0`
/// - rate2: `None`
///
/// # Returns
/// - `session::Model` - In-memory session entity
pub fn entity() -> session::Model {
    entity_builder().build()
}

/// Creates a session entity builder for customization.
///
/// # Returns
/// - `SessionEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let winter = fixture::session::entity_builder()
///     .name("2026 Winter")
///     .dates(date(2026, 1, 1), date(2026, 4, 30))
///     .build();
/// ```
pub fn entity_builder() -> SessionEntityBuilder {
    SessionEntityBuilder::default()
}

/// Builder for creating customized session entity models.
pub struct SessionEntityBuilder {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    rate1: f64,
    rate2: Option<f64>,
}

impl Default for SessionEntityBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            start_date: date(DEFAULT_YEAR, 9, 1),
            end_date: date(DEFAULT_YEAR, 12, 31),
            rate1: DEFAULT_RATE1,
            rate2: DEFAULT_RATE2,
        }
    }
}

impl SessionEntityBuilder {
    /// Sets the session name.
    ///
    /// # Arguments
    /// - `name` - Display name, unique among sessions
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the first and last day of the session.
    ///
    /// # Arguments
    /// - `start_date` - First day of the term
    /// - `end_date` - Last day of the term
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Sets the first pay rate.
    pub fn rate1(mut self, rate1: f64) -> Self {
        self.rate1 = rate1;
        self
    }

    /// Sets the second pay rate, present only for two-rate sessions.
    pub fn rate2(mut self, rate2: Option<f64>) -> Self {
        self.rate2 = rate2;
        self
    }

    /// Builds and returns the session entity model.
    pub fn build(self) -> session::Model {
        session::Model {
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            rate1: self.rate1,
            rate2: self.rate2,
        }
    }
}
