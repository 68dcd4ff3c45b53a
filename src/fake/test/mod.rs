use std::{cell::Cell, rc::Rc};

use chrono::NaiveDate;
use entity::prelude::*;
use test_utils::{builder::TestBuilder, fixture};

use super::*;
use crate::error::{GenerateError, TemplateError};

mod person;
mod position;
mod preconditions;
mod wage_chunk;

/// Seed shared by generator tests so failures reproduce.
const SEED: u64 = 20250901;

/// Generator with a fixed seed, the builtin templates and 2025 as first year.
fn generator() -> Generator<RngFaker, StaticTemplates> {
    Generator::new(RngFaker::seeded(SEED), StaticTemplates::builtin()).start_year(2025)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Template source that counts how often it is asked.
struct CountingTemplates {
    calls: Rc<Cell<usize>>,
    inner: StaticTemplates,
}

impl TemplateSource for CountingTemplates {
    fn available(&mut self) -> Result<Vec<AvailableTemplate>, TemplateError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.available()
    }
}
