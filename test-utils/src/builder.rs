use entity::prelude::*;

use crate::{error::TestError, fixture};

/// Builder for assembling record stores for tests.
///
/// Provides a fluent interface for filling a `RecordStore` with fixture
/// records. Records are appended in call order, so a record's index is the
/// number of records of its kind added before it. Add producer records before
/// the records that reference them; `build()` rejects dangling references.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let store = TestBuilder::new()
///     .with_session(fixture::session::entity())
///     .with_instructor(fixture::instructor::entity())
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Store being assembled.
    store: RecordStore,
}

impl TestBuilder {
    /// Creates a new test builder with an empty store.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no records
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Starts the session cycle of the store in `year`.
    ///
    /// # Arguments
    /// - `year` - Year of the first generated session
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.store.session_cursor = Some(SessionCursor::new(year));
        self
    }

    /// Adds a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.store.sessions.push(session);
        self
    }

    /// Adds a position template.
    pub fn with_position_template(mut self, template: PositionTemplate) -> Self {
        self.store.position_templates.push(template);
        self
    }

    /// Pre-fills the offer template cache so the template source is never asked.
    ///
    /// # Arguments
    /// - `templates` - Templates the generator will pick from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_available_templates(mut self, templates: Vec<AvailableTemplate>) -> Self {
        self.store.available_templates = Some(templates);
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, instructor: Instructor) -> Self {
        self.store.instructors.push(instructor);
        self
    }

    /// Adds a position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.store.positions.push(position);
        self
    }

    /// Adds an applicant.
    pub fn with_applicant(mut self, applicant: Applicant) -> Self {
        self.store.applicants.push(applicant);
        self
    }

    /// Adds an application.
    pub fn with_application(mut self, application: Application) -> Self {
        self.store.applications.push(application);
        self
    }

    /// Adds an assignment.
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.store.assignments.push(assignment);
        self
    }

    /// Adds a wage chunk.
    pub fn with_wage_chunk(mut self, wage_chunk: WageChunk) -> Self {
        self.store.wage_chunks.push(wage_chunk);
        self
    }

    /// Adds everything needed to pay someone in session `session_index`.
    ///
    /// This convenience method adds, in dependency order:
    /// - a position template for the session
    /// - an instructor
    /// - a position in the session taught by that instructor
    /// - an applicant
    /// - an assignment of the applicant to the position
    ///
    /// Position and assignment dates copy the session dates when the session
    /// exists. Each call adds distinct UTORids and position codes, so it can be
    /// repeated to build several independent assignments.
    ///
    /// # Arguments
    /// - `session_index` - Index of an already added session
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_staffing(self, session_index: usize) -> Self {
        let n = self.store.assignments.len();
        let instructor_index = self.store.instructors.len();
        let position_index = self.store.positions.len();
        let applicant_index = self.store.applicants.len();

        let mut position = fixture::position::entity_builder()
            .position_code(format!("PHY{}H1-F", 241 + n))
            .session_index(session_index)
            .instructor_indexes(vec![instructor_index]);
        let mut assignment = fixture::assignment::entity_builder()
            .position_index(position_index)
            .applicant_index(applicant_index);
        if let Some(session) = self.store.sessions.get(session_index) {
            position = position.est_dates(session.start_date, session.end_date);
            assignment = assignment.contract(session.start_date, session.end_date);
        }

        self.with_position_template(
            fixture::position_template::entity_builder()
                .session_index(session_index)
                .build(),
        )
        .with_instructor(
            fixture::instructor::entity_builder()
                .utorid(format!("instr{:02}", instructor_index))
                .build(),
        )
        .with_position(position.build())
        .with_applicant(
            fixture::applicant::entity_builder()
                .utorid(format!("appl{:02}", applicant_index))
                .build(),
        )
        .with_assignment(assignment.build())
    }

    /// Builds the store after checking every cross-reference.
    ///
    /// # Returns
    /// - `Ok(RecordStore)` - Referentially valid store
    /// - `Err(TestError::DanglingReferences)` - A record points at a missing record
    pub fn build(self) -> Result<RecordStore, TestError> {
        let dangling = self.store.dangling_references();
        if !dangling.is_empty() {
            return Err(TestError::DanglingReferences(dangling));
        }

        Ok(self.store)
    }
}
