use entity::prelude::{Application, EntityKind, Preference, Record};

use crate::{
    error::GenerateError,
    fake::{context::BuildContext, faker::FakeSource, Fixture},
};

/// Programs an applicant can be enrolled in.
pub const PROGRAMS: &[&str] = &[
    "PhD", "MSc", "MScAC", "MASc", "MEng", "OG", "PostDoc", "UG", "Other",
];

const MAX_YEAR_IN_PROGRAM: u32 = 10;
const MAX_PREFERENCE_LEVEL: u32 = 10;

impl Fixture for Application {
    const KIND: EntityKind = EntityKind::Applications;
    type Key = (usize, usize);

    fn natural_key(&self) -> Option<Self::Key> {
        Some((self.session_index, self.applicant_index))
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let session_index = ctx.random_index(EntityKind::Sessions)?;
        let applicant_index = ctx.random_index(EntityKind::Applicants)?;

        Ok(Application {
            comments: ctx.faker.paragraph(),
            program: ctx.faker.pick(PROGRAMS).copied().unwrap_or("Other").to_string(),
            department: ctx.faker.subject(),
            previous_uoft_ta_experience: ctx.faker.paragraph(),
            yip: ctx.faker.number_between(1, MAX_YEAR_IN_PROGRAM),
            annotation: ctx.faker.paragraph(),
            session_index,
            applicant_index,
        })
    }

    fn into_record(self) -> Record {
        Record::Application(self)
    }
}

impl Fixture for Preference {
    const KIND: EntityKind = EntityKind::Preferences;
    type Key = (usize, usize);

    fn natural_key(&self) -> Option<Self::Key> {
        Some((self.application_index, self.position_index))
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let position_index = ctx.random_index(EntityKind::Positions)?;
        let application_index = ctx.random_index(EntityKind::Applications)?;

        Ok(Preference {
            position_index,
            application_index,
            preference_level: ctx.faker.number_between(1, MAX_PREFERENCE_LEVEL),
        })
    }

    fn into_record(self) -> Record {
        Record::Preference(self)
    }
}
