//! Per-batch state handed to fixture builders.

use std::path::{Path, PathBuf};

use entity::prelude::{
    AvailableTemplate, DanglingReference, EntityKind, RecordStore, SessionCursor,
};

use crate::{
    error::GenerateError,
    fake::{calendar::Term, faker::FakeSource, template::TemplateSource},
};

/// Producer name reported when the offer template list is empty.
pub const AVAILABLE_TEMPLATES: &str = "available templates";

/// Where offer overrides are filed when templates do not come from disk.
pub const DEFAULT_TEMPLATE_DIR: &str = "position_templates";

/// Read access to the store plus the state a batch may change.
///
/// Builders never write to the store. The session cursor and the template
/// cache are working copies that the generator writes back once the whole
/// batch has succeeded.
pub struct BuildContext<'a, F> {
    /// Records generated by earlier batches.
    pub store: &'a RecordStore,
    pub faker: &'a mut F,
    kind: EntityKind,
    cursor: Option<SessionCursor>,
    start_year: i32,
    templates: &'a mut dyn TemplateSource,
    cached_templates: Option<Vec<AvailableTemplate>>,
}

impl<'a, F: FakeSource> BuildContext<'a, F> {
    pub(crate) fn new(
        kind: EntityKind,
        store: &'a RecordStore,
        faker: &'a mut F,
        templates: &'a mut dyn TemplateSource,
        start_year: i32,
    ) -> Self {
        Self {
            store,
            faker,
            kind,
            cursor: store.session_cursor,
            start_year,
            templates,
            cached_templates: store.available_templates.clone(),
        }
    }

    /// Random index into the `producer` sequence.
    ///
    /// # Returns
    /// - `Ok(usize)` - Index of an existing record
    /// - `Err(GenerateError::EmptyProducer)` - `producer` has no records
    pub fn random_index(&mut self, producer: EntityKind) -> Result<usize, GenerateError> {
        self.faker
            .index(self.store.len(producer))
            .ok_or(GenerateError::EmptyProducer {
                kind: self.kind,
                producer: producer.as_str(),
            })
    }

    /// Error for a stored index that points past the end of its target.
    pub fn dangling(
        &self,
        holder: EntityKind,
        record: usize,
        field: &'static str,
        target: EntityKind,
        value: usize,
    ) -> GenerateError {
        GenerateError::DanglingReferences(vec![DanglingReference {
            kind: holder,
            record,
            field,
            target,
            value,
        }])
    }

    /// Advances the term cycle and returns the term to build with its year.
    pub fn next_term(&mut self) -> (Term, i32) {
        let start_year = self.start_year;
        let cursor = self
            .cursor
            .get_or_insert_with(|| SessionCursor::new(start_year));
        let term = Term::for_ordinal(cursor.ordinal);
        let year = cursor.year;

        cursor.ordinal += 1;
        if term == Term::FallWinter {
            cursor.year += 1;
        }

        (term, year)
    }

    /// Random offer template, fetching the template list on first use.
    ///
    /// # Returns
    /// - `Ok(AvailableTemplate)` - A template from the cached list
    /// - `Err(GenerateError::Templates)` - The template source failed
    /// - `Err(GenerateError::EmptyProducer)` - The source has no templates
    pub fn random_template(&mut self) -> Result<AvailableTemplate, GenerateError> {
        if self.cached_templates.is_none() {
            let fetched = self.templates.available()?;
            tracing::debug!("Cached {} available offer templates", fetched.len());
            self.cached_templates = Some(fetched);
        }

        let templates = self.cached_templates.as_deref().unwrap_or_default();
        self.faker
            .pick(templates)
            .cloned()
            .ok_or(GenerateError::EmptyProducer {
                kind: self.kind,
                producer: AVAILABLE_TEMPLATES,
            })
    }

    /// Directory offer overrides are filed under: the template source's own
    /// directory, or [`DEFAULT_TEMPLATE_DIR`].
    pub fn template_dir(&self) -> PathBuf {
        self.templates
            .dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR))
    }

    /// Hands the working copies back for committing to the store.
    pub(crate) fn finish(self) -> (Option<SessionCursor>, Option<Vec<AvailableTemplate>>) {
        (self.cursor, self.cached_templates)
    }
}
