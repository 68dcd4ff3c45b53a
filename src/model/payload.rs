use entity::prelude::RecordStore;
use serde::{Deserialize, Serialize};

use super::{
    application::{ApplicationDto, PreferenceDto},
    assignment::{AssignmentDto, ReportingTagDto, WageChunkDto},
    person::{ApplicantDto, InstructorDto},
    position::PositionDto,
    session::{PositionTemplateDto, SessionDto},
};

/// Every generated record, keyed by collection and ready to be persisted.
///
/// Collections are listed in an order in which they can be inserted: each
/// collection only references ids of collections before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPayloadDto {
    pub sessions: Vec<SessionDto>,
    pub position_templates: Vec<PositionTemplateDto>,
    pub instructors: Vec<InstructorDto>,
    pub positions: Vec<PositionDto>,
    pub applicants: Vec<ApplicantDto>,
    pub applications: Vec<ApplicationDto>,
    pub preferences: Vec<PreferenceDto>,
    pub assignments: Vec<AssignmentDto>,
    pub wage_chunks: Vec<WageChunkDto>,
    pub reporting_tags: Vec<ReportingTagDto>,
}

/// Converts every record of a sequence with its index.
fn convert<M, D>(records: &[M], from_entity: fn(usize, &M) -> D) -> Vec<D> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| from_entity(index, record))
        .collect()
}

impl SeedPayloadDto {
    /// Converts a store into its persistence payload.
    ///
    /// # Arguments
    /// - `store` - Referentially valid record store
    ///
    /// # Returns
    /// - `SeedPayloadDto` - Records with ids in place of indices
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            sessions: convert(&store.sessions, SessionDto::from_entity),
            position_templates: convert(&store.position_templates, PositionTemplateDto::from_entity),
            instructors: convert(&store.instructors, InstructorDto::from_entity),
            positions: convert(&store.positions, PositionDto::from_entity),
            applicants: convert(&store.applicants, ApplicantDto::from_entity),
            applications: convert(&store.applications, ApplicationDto::from_entity),
            preferences: convert(&store.preferences, PreferenceDto::from_entity),
            assignments: convert(&store.assignments, AssignmentDto::from_entity),
            wage_chunks: convert(&store.wage_chunks, WageChunkDto::from_entity),
            reporting_tags: convert(&store.reporting_tags, ReportingTagDto::from_entity),
        }
    }
}
