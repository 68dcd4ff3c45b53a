//! Fake fixture graph generation.
//!
//! The generator builds internally consistent batches of records for the ten
//! entity kinds of the staffing graph. Every kind implements [`Fixture`], which
//! names its natural key and knows how to build one candidate from the records
//! already in the [`RecordStore`].
//!
//! # Usage
//!
//! Generate producer kinds before the kinds that reference them and append
//! each batch to the store before generating the next:
//!
//! ```rust,ignore
//! use tapp::fake::{Generator, RngFaker, StaticTemplates};
//!
//! let mut store = RecordStore::new();
//! let mut generator = Generator::new(RngFaker::seeded(1), StaticTemplates::builtin());
//!
//! let sessions = generator.generate(&mut store, EntityKind::Sessions, 4)?;
//! store.append(sessions);
//! ```
//!
//! # Uniqueness
//!
//! Candidates whose natural key matches a record already placed in the batch
//! are discarded and rebuilt. Rebuilding is bounded by
//! [`Generator::max_attempts`] per record; running out of attempts means the
//! producers cannot support the requested count and fails the whole batch.

pub mod builder;
pub mod calendar;
pub mod context;
pub mod faker;
pub mod template;

#[cfg(test)]
mod test;

use chrono::Datelike;
use entity::prelude::{EntityKind, Record, RecordStore};

use crate::error::GenerateError;

pub use self::{
    context::BuildContext,
    faker::{FakeSource, RngFaker},
    template::{DirectoryTemplates, StaticTemplates, TemplateSource},
};

/// Default number of candidates built per record before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A record kind the generator can build.
pub trait Fixture: Sized {
    const KIND: EntityKind;

    /// Projection of the fields that must be unique within a batch.
    type Key: PartialEq;

    /// Natural key of this record.
    ///
    /// `None` when a key field is blank; such a record never counts as a
    /// duplicate of another.
    fn natural_key(&self) -> Option<Self::Key>;

    /// Builds one candidate record.
    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError>;

    fn into_record(self) -> Record;
}

/// Builds batches of fake records against a record store.
pub struct Generator<F, T> {
    faker: F,
    templates: T,
    max_attempts: usize,
    start_year: Option<i32>,
}

impl<F: FakeSource, T: TemplateSource> Generator<F, T> {
    /// Creates a generator with the default retry budget.
    ///
    /// The first session of a fresh store falls in the current calendar year
    /// unless [`Generator::start_year`] says otherwise.
    pub fn new(faker: F, templates: T) -> Self {
        Self {
            faker,
            templates,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            start_year: None,
        }
    }

    /// Sets the number of candidates built per record before the batch fails.
    ///
    /// Values below one are treated as one.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the year of the first session of a store without a session cursor.
    pub fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Generates `count` records of kind `R` unique on their natural key.
    ///
    /// The batch is returned, not appended: indices into it only become valid
    /// once the caller appends it to the store. The session cursor and the
    /// template cache are written back to `store` only when the whole batch
    /// succeeds.
    ///
    /// # Returns
    /// - `Ok(Vec<R>)` - Exactly `count` records
    /// - `Err(GenerateError::EmptyProducer)` - A producer kind has no records
    /// - `Err(GenerateError::Exhausted)` - No unique candidate within the retry budget
    /// - `Err(GenerateError::Templates)` - The offer template source failed
    pub fn batch<R: Fixture>(
        &mut self,
        store: &mut RecordStore,
        count: usize,
    ) -> Result<Vec<R>, GenerateError> {
        let start_year = self
            .start_year
            .unwrap_or_else(|| chrono::Local::now().year());
        let mut ctx = BuildContext::new(
            R::KIND,
            store,
            &mut self.faker,
            &mut self.templates,
            start_year,
        );

        let mut batch: Vec<R> = Vec::with_capacity(count);
        let mut keys: Vec<Option<R::Key>> = Vec::with_capacity(count);

        while batch.len() < count {
            let mut attempts = 0;
            let candidate = loop {
                if attempts == self.max_attempts {
                    return Err(GenerateError::Exhausted {
                        kind: R::KIND,
                        requested: count,
                        generated: batch.len(),
                        attempts,
                    });
                }
                attempts += 1;

                let candidate = R::build(&mut ctx)?;
                let key = candidate.natural_key();
                if !is_duplicate(&keys, &key) {
                    keys.push(key);
                    break candidate;
                }
                tracing::debug!(
                    "Discarded duplicate {} candidate {} (attempt {})",
                    R::KIND,
                    batch.len(),
                    attempts
                );
            };

            if attempts > 1 && attempts * 2 > self.max_attempts {
                tracing::warn!(
                    "{} record {} needed {} of {} attempts to be unique",
                    R::KIND,
                    batch.len(),
                    attempts,
                    self.max_attempts
                );
            }
            batch.push(candidate);
        }

        let (cursor, templates) = ctx.finish();
        store.session_cursor = cursor;
        store.available_templates = templates;

        tracing::debug!("Generated {} {}", batch.len(), R::KIND);

        Ok(batch)
    }

    /// Generates `count` records of `kind`.
    ///
    /// Kind-dispatched form of [`Generator::batch`].
    pub fn generate(
        &mut self,
        store: &mut RecordStore,
        kind: EntityKind,
        count: usize,
    ) -> Result<Vec<Record>, GenerateError> {
        use entity::prelude::*;

        match kind {
            EntityKind::Sessions => self.records::<Session>(store, count),
            EntityKind::PositionTemplates => self.records::<PositionTemplate>(store, count),
            EntityKind::Instructors => self.records::<Instructor>(store, count),
            EntityKind::Positions => self.records::<Position>(store, count),
            EntityKind::Applicants => self.records::<Applicant>(store, count),
            EntityKind::Applications => self.records::<Application>(store, count),
            EntityKind::Preferences => self.records::<Preference>(store, count),
            EntityKind::Assignments => self.records::<Assignment>(store, count),
            EntityKind::WageChunks => self.records::<WageChunk>(store, count),
            EntityKind::ReportingTags => self.records::<ReportingTag>(store, count),
        }
    }

    /// Generates `count` records of the kind named `name`, e.g. `"positions"`.
    ///
    /// Unrecognized names produce no records and leave the store untouched.
    pub fn generate_named(
        &mut self,
        store: &mut RecordStore,
        name: &str,
        count: usize,
    ) -> Result<Vec<Record>, GenerateError> {
        match EntityKind::from_name(name) {
            Some(kind) => self.generate(store, kind, count),
            None => {
                tracing::debug!("Ignoring request for unknown entity kind '{}'", name);
                Ok(Vec::new())
            }
        }
    }

    /// Generates `count` records of `kind` and appends them to the store.
    ///
    /// # Returns
    /// - `Ok(usize)` - Index of the first appended record
    pub fn populate(
        &mut self,
        store: &mut RecordStore,
        kind: EntityKind,
        count: usize,
    ) -> Result<usize, GenerateError> {
        let first = store.len(kind);
        let records = self.generate(store, kind, count)?;
        store.append(records);

        Ok(first)
    }

    fn records<R: Fixture>(
        &mut self,
        store: &mut RecordStore,
        count: usize,
    ) -> Result<Vec<Record>, GenerateError> {
        Ok(self
            .batch::<R>(store, count)?
            .into_iter()
            .map(R::into_record)
            .collect())
    }
}

/// Whether `key` matches a key already placed in the batch.
///
/// Missing keys never match, on either side.
fn is_duplicate<K: PartialEq>(placed: &[Option<K>], key: &Option<K>) -> bool {
    match key {
        Some(key) => placed.iter().flatten().any(|existing| existing == key),
        None => false,
    }
}
