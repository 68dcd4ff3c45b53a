use entity::prelude::{Assignment, EntityKind, Record};

use crate::{
    error::GenerateError,
    fake::{context::BuildContext, faker::FakeSource, Fixture},
};

impl Fixture for Assignment {
    const KIND: EntityKind = EntityKind::Assignments;
    type Key = (usize, usize);

    fn natural_key(&self) -> Option<Self::Key> {
        Some((self.position_index, self.applicant_index))
    }

    /// Builds an assignment whose contract covers the position's estimated
    /// dates. Half of the assignments get an offer override filed in the
    /// template directory.
    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let store = ctx.store;

        let position_index = ctx.random_index(EntityKind::Positions)?;
        let applicant_index = ctx.random_index(EntityKind::Applicants)?;
        let position = &store.positions[position_index];

        let offer_override_pdf = match ctx.faker.index(2) {
            Some(1) => {
                let file = format!("{}.pdf", ctx.faker.word());
                Some(ctx.template_dir().join(file).display().to_string())
            }
            _ => None,
        };

        Ok(Assignment {
            contract_start: position.est_start_date,
            contract_end: position.est_end_date,
            note: ctx.faker.paragraph(),
            offer_override_pdf,
            position_index,
            applicant_index,
        })
    }

    fn into_record(self) -> Record {
        Record::Assignment(self)
    }
}
