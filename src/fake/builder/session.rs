use entity::prelude::{EntityKind, Record, Session};

use crate::{
    error::GenerateError,
    fake::{builder::present, context::BuildContext, faker::FakeSource, Fixture},
};

/// Mean and spread of generated hourly rates.
const RATE_MEAN: f64 = 50.0;
const RATE_STD_DEV: f64 = 3.5;

impl Fixture for Session {
    const KIND: EntityKind = EntityKind::Sessions;
    type Key = String;

    fn natural_key(&self) -> Option<Self::Key> {
        present(&self.name)
    }

    /// Builds the next term of the Fall, Winter, Summer, Fall-Winter cycle.
    ///
    /// Only Fall-Winter sessions carry a second rate.
    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let (term, year) = ctx.next_term();
        let (start_date, end_date) = term.dates(year);

        let rate1 = random_rate(ctx.faker);
        let rate2 = random_rate(ctx.faker);

        Ok(Session {
            name: term.name(year),
            start_date,
            end_date,
            rate1,
            rate2: term.has_second_rate().then_some(rate2),
        })
    }

    fn into_record(self) -> Record {
        Record::Session(self)
    }
}

/// Normally distributed rate truncated to cents.
fn random_rate<F: FakeSource>(faker: &mut F) -> f64 {
    (faker.normal(RATE_MEAN, RATE_STD_DEV) * 100.0).trunc() / 100.0
}
