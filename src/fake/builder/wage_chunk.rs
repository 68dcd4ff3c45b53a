use entity::prelude::{EntityKind, Record, WageChunk};

use crate::{
    error::GenerateError,
    fake::{context::BuildContext, faker::FakeSource, Fixture},
};

impl Fixture for WageChunk {
    const KIND: EntityKind = EntityKind::WageChunks;
    type Key = usize;

    fn natural_key(&self) -> Option<Self::Key> {
        Some(self.assignment_index)
    }

    /// Builds a chunk covering a whole assignment.
    ///
    /// Dates come from the assignment contract, hours from the position
    /// estimate and the rate from the position's session.
    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let store = ctx.store;

        let assignment_index = ctx.random_index(EntityKind::Assignments)?;
        let assignment = &store.assignments[assignment_index];
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
        let session = store.sessions.get(position.session_index).ok_or_else(|| {
            ctx.dangling(
                EntityKind::Positions,
                assignment.position_index,
                "session_index",
                EntityKind::Sessions,
                position.session_index,
            )
        })?;

        Ok(WageChunk {
            start_date: assignment.contract_start,
            end_date: assignment.contract_end,
            hours: position.est_hours_per_assignment,
            rate: session.effective_rate(),
            assignment_index,
        })
    }

    fn into_record(self) -> Record {
        Record::WageChunk(self)
    }
}
