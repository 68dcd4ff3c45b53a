use entity::prelude::{EntityKind, Record, ReportingTag};

use crate::{
    error::GenerateError,
    fake::{builder::present, context::BuildContext, faker::FakeSource, Fixture},
};

impl Fixture for ReportingTag {
    const KIND: EntityKind = EntityKind::ReportingTags;
    type Key = String;

    fn natural_key(&self) -> Option<Self::Key> {
        present(&self.name)
    }

    /// Tags a wage chunk with the course code of the position it pays for.
    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let store = ctx.store;

        let wage_chunk_index = ctx.random_index(EntityKind::WageChunks)?;
        let assignment_index = store.wage_chunks[wage_chunk_index].assignment_index;
        let assignment = store.assignments.get(assignment_index).ok_or_else(|| {
            ctx.dangling(
                EntityKind::WageChunks,
                wage_chunk_index,
                "assignment_index",
                EntityKind::Assignments,
                assignment_index,
            )
        })?;
        let position = store
            .positions
            .get(assignment.position_index)
            .ok_or_else(|| {
                ctx.dangling(
                    EntityKind::Assignments,
                    assignment_index,
                    "position_index",
                    EntityKind::Positions,
                    assignment.position_index,
                )
            })?;

        Ok(ReportingTag {
            name: position.course_code(),
            wage_chunk_index,
        })
    }

    fn into_record(self) -> Record {
        Record::ReportingTag(self)
    }
}
