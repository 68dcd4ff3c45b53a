//! In-memory record store shared by the generator and its consumers.
//!
//! The store keeps one ordered sequence per entity kind. A record's position in
//! its sequence is its identity until the graph is persisted, so sequences are
//! append-only: batches are appended whole and nothing is reordered, mutated or
//! removed afterward.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    kind::EntityKind,
    prelude::{
        Applicant, Application, Assignment, AvailableTemplate, Instructor, Position,
        PositionTemplate, Preference, ReportingTag, Session, SessionCursor, WageChunk,
    },
};

/// A single record of any kind, as produced by kind-dispatched generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Session(Session),
    PositionTemplate(PositionTemplate),
    Instructor(Instructor),
    Position(Position),
    Applicant(Applicant),
    Application(Application),
    Preference(Preference),
    Assignment(Assignment),
    WageChunk(WageChunk),
    ReportingTag(ReportingTag),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Session(_) => EntityKind::Sessions,
            Self::PositionTemplate(_) => EntityKind::PositionTemplates,
            Self::Instructor(_) => EntityKind::Instructors,
            Self::Position(_) => EntityKind::Positions,
            Self::Applicant(_) => EntityKind::Applicants,
            Self::Application(_) => EntityKind::Applications,
            Self::Preference(_) => EntityKind::Preferences,
            Self::Assignment(_) => EntityKind::Assignments,
            Self::WageChunk(_) => EntityKind::WageChunks,
            Self::ReportingTag(_) => EntityKind::ReportingTags,
        }
    }
}

/// Per-kind record sequences plus the generation state that travels with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordStore {
    pub sessions: Vec<Session>,
    pub position_templates: Vec<PositionTemplate>,
    pub instructors: Vec<Instructor>,
    pub positions: Vec<Position>,
    pub applicants: Vec<Applicant>,
    pub applications: Vec<Application>,
    pub preferences: Vec<Preference>,
    pub assignments: Vec<Assignment>,
    pub wage_chunks: Vec<WageChunk>,
    pub reporting_tags: Vec<ReportingTag>,

    /// Term cycle state. `None` until the first session is generated.
    pub session_cursor: Option<SessionCursor>,

    /// Offer templates fetched from the template source, cached for the
    /// lifetime of the store.
    pub available_templates: Option<Vec<AvailableTemplate>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for `kind`.
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Sessions => self.sessions.len(),
            EntityKind::PositionTemplates => self.position_templates.len(),
            EntityKind::Instructors => self.instructors.len(),
            EntityKind::Positions => self.positions.len(),
            EntityKind::Applicants => self.applicants.len(),
            EntityKind::Applications => self.applications.len(),
            EntityKind::Preferences => self.preferences.len(),
            EntityKind::Assignments => self.assignments.len(),
            EntityKind::WageChunks => self.wage_chunks.len(),
            EntityKind::ReportingTags => self.reporting_tags.len(),
        }
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }

    /// Appends a finished batch, assigning indices in batch order.
    pub fn append(&mut self, records: Vec<Record>) {
        for record in records {
            match record {
                Record::Session(r) => self.sessions.push(r),
                Record::PositionTemplate(r) => self.position_templates.push(r),
                Record::Instructor(r) => self.instructors.push(r),
                Record::Position(r) => self.positions.push(r),
                Record::Applicant(r) => self.applicants.push(r),
                Record::Application(r) => self.applications.push(r),
                Record::Preference(r) => self.preferences.push(r),
                Record::Assignment(r) => self.assignments.push(r),
                Record::WageChunk(r) => self.wage_chunks.push(r),
                Record::ReportingTag(r) => self.reporting_tags.push(r),
            }
        }
    }

    /// Lists every cross-reference that does not resolve to an existing record.
    ///
    /// An empty result means the store is referentially valid and can be handed
    /// to a persistence layer.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check =
            |kind: EntityKind, record: usize, field: &'static str, target: EntityKind, value: usize| {
                if value >= self.len(target) {
                    dangling.push(DanglingReference {
                        kind,
                        record,
                        field,
                        target,
                        value,
                    });
                }
            };

        for (i, r) in self.position_templates.iter().enumerate() {
            check(
                EntityKind::PositionTemplates,
                i,
                "session_index",
                EntityKind::Sessions,
                r.session_index,
            );
        }
        for (i, r) in self.positions.iter().enumerate() {
            check(EntityKind::Positions, i, "session_index", EntityKind::Sessions, r.session_index);
            for instructor in &r.instructor_indexes {
                check(
                    EntityKind::Positions,
                    i,
                    "instructor_indexes",
                    EntityKind::Instructors,
                    *instructor,
                );
            }
        }
        for (i, r) in self.applications.iter().enumerate() {
            check(
                EntityKind::Applications,
                i,
                "session_index",
                EntityKind::Sessions,
                r.session_index,
            );
            check(
                EntityKind::Applications,
                i,
                "applicant_index",
                EntityKind::Applicants,
                r.applicant_index,
            );
        }
        for (i, r) in self.preferences.iter().enumerate() {
            check(
                EntityKind::Preferences,
                i,
                "position_index",
                EntityKind::Positions,
                r.position_index,
            );
            check(
                EntityKind::Preferences,
                i,
                "application_index",
                EntityKind::Applications,
                r.application_index,
            );
        }
        for (i, r) in self.assignments.iter().enumerate() {
            check(
                EntityKind::Assignments,
                i,
                "position_index",
                EntityKind::Positions,
                r.position_index,
            );
            check(
                EntityKind::Assignments,
                i,
                "applicant_index",
                EntityKind::Applicants,
                r.applicant_index,
            );
        }
        for (i, r) in self.wage_chunks.iter().enumerate() {
            check(
                EntityKind::WageChunks,
                i,
                "assignment_index",
                EntityKind::Assignments,
                r.assignment_index,
            );
        }
        for (i, r) in self.reporting_tags.iter().enumerate() {
            check(
                EntityKind::ReportingTags,
                i,
                "wage_chunk_index",
                EntityKind::WageChunks,
                r.wage_chunk_index,
            );
        }

        dangling
    }
}

/// A cross-reference pointing past the end of its target sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Kind of the record holding the reference.
    pub kind: EntityKind,
    /// Index of that record within its kind.
    pub record: usize,
    pub field: &'static str,
    pub target: EntityKind,
    pub value: usize,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}].{} = {} does not resolve into {}",
            self.kind, self.record, self.field, self.value, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session() -> Session {
        Session {
            name: "2025 Fall".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            rate1: 50.0,
            rate2: None,
        }
    }

    #[test]
    fn append_assigns_indices_in_batch_order() {
        let mut store = RecordStore::new();
        let mut second = session();
        second.name = "2026 Winter".to_string();

        store.append(vec![Record::Session(session()), Record::Session(second)]);

        assert_eq!(store.len(EntityKind::Sessions), 2);
        assert_eq!(store.sessions[1].name, "2026 Winter");
    }

    #[test]
    fn reports_reference_past_end_of_target() {
        let mut store = RecordStore::new();
        store.append(vec![
            Record::Session(session()),
            Record::PositionTemplate(PositionTemplate {
                position_type: "Standard".to_string(),
                offer_template: "standard.html".to_string(),
                session_index: 3,
            }),
        ]);

        let dangling = store.dangling_references();

        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].kind, EntityKind::PositionTemplates);
        assert_eq!(dangling[0].field, "session_index");
        assert_eq!(dangling[0].value, 3);
    }

    #[test]
    fn empty_store_has_no_dangling_references() {
        assert!(RecordStore::new().dangling_references().is_empty());
    }
}
