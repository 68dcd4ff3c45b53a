use entity::prelude::{EntityKind, PositionTemplate, Record};

use crate::{
    error::GenerateError,
    fake::{builder::present, context::BuildContext, faker::FakeSource, Fixture},
};

impl Fixture for PositionTemplate {
    const KIND: EntityKind = EntityKind::PositionTemplates;
    type Key = (usize, String);

    fn natural_key(&self) -> Option<Self::Key> {
        Some((self.session_index, present(&self.position_type)?))
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let session_index = ctx.random_index(EntityKind::Sessions)?;
        let template = ctx.random_template()?;

        Ok(PositionTemplate {
            position_type: ctx.faker.word(),
            offer_template: template.offer_template,
            session_index,
        })
    }

    fn into_record(self) -> Record {
        Record::PositionTemplate(self)
    }
}
