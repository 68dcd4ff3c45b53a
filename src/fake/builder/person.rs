//! Instructor and applicant builders.
//!
//! Both kinds derive their UTORid the same way: the first three characters of
//! the last name and of the first name with punctuation dropped, then two
//! random digits, lower-cased.

use entity::prelude::{Applicant, EntityKind, Instructor, Record};

use crate::{
    error::GenerateError,
    fake::{builder::present, context::BuildContext, faker::FakeSource, Fixture},
};

const NAME_FRAGMENT_LEN: usize = 3;
const UTORID_DIGITS: usize = 2;
const STUDENT_NUMBER_DIGITS: usize = 10;

impl Fixture for Instructor {
    const KIND: EntityKind = EntityKind::Instructors;
    type Key = String;

    fn natural_key(&self) -> Option<Self::Key> {
        present(&self.utorid)
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let first_name = ctx.faker.first_name();
        let last_name = ctx.faker.last_name();
        let utorid = utorid(ctx.faker, &first_name, &last_name);

        Ok(Instructor {
            email: ctx
                .faker
                .email(&format!("{} {}", first_name, last_name)),
            first_name,
            last_name,
            utorid,
        })
    }

    fn into_record(self) -> Record {
        Record::Instructor(self)
    }
}

impl Fixture for Applicant {
    const KIND: EntityKind = EntityKind::Applicants;
    type Key = String;

    fn natural_key(&self) -> Option<Self::Key> {
        present(&self.utorid)
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let first_name = ctx.faker.first_name();
        let last_name = ctx.faker.last_name();
        let utorid = utorid(ctx.faker, &first_name, &last_name);

        Ok(Applicant {
            email: ctx.faker.email(&utorid),
            first_name,
            last_name,
            utorid,
            phone: ctx.faker.phone_number(),
            student_number: ctx.faker.digits(STUDENT_NUMBER_DIGITS),
        })
    }

    fn into_record(self) -> Record {
        Record::Applicant(self)
    }
}

/// UTORid slug for a person, e.g. `"smijoh42"` for John Smith.
pub fn utorid<F: FakeSource>(faker: &mut F, first_name: &str, last_name: &str) -> String {
    let fragment = |name: &str| -> String {
        name.chars()
            .take(NAME_FRAGMENT_LEN)
            .filter(|c| c.is_alphanumeric())
            .collect()
    };

    format!(
        "{}{}{}",
        fragment(last_name),
        fragment(first_name),
        faker.digits(UTORID_DIGITS)
    )
    .to_lowercase()
}
