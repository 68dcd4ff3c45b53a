//! Position builder.
//!
//! Positions are only created for sessions that have at least one position
//! template, and take their position type from one of that session's
//! templates. Codes follow the `ABC123H1-F` shape: three letters of the course
//! title, its three-digit level, and the semester type of the session.

use entity::prelude::{EntityKind, Position, Record};

use crate::{
    error::GenerateError,
    fake::{
        builder::present,
        calendar::{ad_window, semester_type},
        context::BuildContext,
        faker::FakeSource,
        Fixture,
    },
};

const MIN_HOURS: u32 = 50;
const MAX_HOURS: u32 = 80;
const MIN_ASSIGNMENTS: u32 = 3;
const MAX_ASSIGNMENTS: u32 = 15;
const MIN_ENROLLMENT: u32 = 70;
const MAX_ENROLLMENT: u32 = 1200;
/// Waitlists hold at most this share of enrollment, in percent.
const MAX_WAITLIST_PERCENT: u32 = 30;

impl Fixture for Position {
    const KIND: EntityKind = EntityKind::Positions;
    type Key = (usize, String);

    fn natural_key(&self) -> Option<Self::Key> {
        Some((self.session_index, present(&self.position_code)?))
    }

    fn build<F: FakeSource>(ctx: &mut BuildContext<'_, F>) -> Result<Self, GenerateError> {
        let store = ctx.store;

        let template_index = ctx.random_index(EntityKind::PositionTemplates)?;
        let session_index = store.position_templates[template_index].session_index;
        let session = store.sessions.get(session_index).ok_or_else(|| {
            ctx.dangling(
                EntityKind::PositionTemplates,
                template_index,
                "session_index",
                EntityKind::Sessions,
                session_index,
            )
        })?;

        let session_templates: Vec<_> = store
            .position_templates
            .iter()
            .filter(|template| template.session_index == session_index)
            .collect();
        let position_type = ctx
            .faker
            .pick(&session_templates)
            .map(|template| template.position_type.clone())
            .unwrap_or_default();

        let course = ctx.faker.course_name();
        let semester = semester_type(session.start_date, session.end_date);
        let position_code = course_code(&course, semester);

        let hours = ctx.faker.number_between(MIN_HOURS, MAX_HOURS);
        let num_assignments = ctx.faker.number_between(MIN_ASSIGNMENTS, MAX_ASSIGNMENTS);
        let enrollment = ctx.faker.number_between(MIN_ENROLLMENT, MAX_ENROLLMENT);
        let (ad_open_date, ad_close_date) = ad_window(session.start_date);

        Ok(Position {
            position_code,
            position_title: course,
            est_hours_per_assignment: hours,
            est_start_date: session.start_date,
            est_end_date: session.end_date,
            position_type,
            session_index,
            ad_hours_per_assignment: hours,
            ad_num_assignments: num_assignments,
            ad_open_date,
            ad_close_date,
            duties: ctx.faker.paragraph(),
            qualifications: ctx.faker.paragraph(),
            desired_num_assignments: num_assignments,
            current_enrollment: enrollment,
            current_waitlisted: ctx
                .faker
                .number_between(0, enrollment * MAX_WAITLIST_PERCENT / 100),
            instructor_indexes: random_instructors(ctx)?,
        })
    }

    fn into_record(self) -> Record {
        Record::Position(self)
    }
}

/// Position code for `course` running in a `semester` half.
///
/// Takes the first three characters of the title upper-cased and its last
/// three characters, e.g. `"Physics 241"` and `"H1-F"` give `"PHY241H1-F"`.
pub fn course_code(course: &str, semester: &str) -> String {
    let chars: Vec<char> = course.chars().collect();
    let prefix: String = chars.iter().take(3).collect::<String>().to_uppercase();
    let suffix: String = chars[chars.len().saturating_sub(3)..].iter().collect();
    format!("{}{}{}", prefix, suffix, semester)
}

/// Random, de-duplicated instructor indices.
///
/// Draws one more index than a random index into the instructors, keeping
/// each instructor the first time it is drawn.
fn random_instructors<F: FakeSource>(
    ctx: &mut BuildContext<'_, F>,
) -> Result<Vec<usize>, GenerateError> {
    let draws = ctx.random_index(EntityKind::Instructors)? + 1;

    let mut selected = Vec::with_capacity(draws);
    for _ in 0..draws {
        let chosen = ctx.random_index(EntityKind::Instructors)?;
        if !selected.contains(&chosen) {
            selected.push(chosen);
        }
    }

    Ok(selected)
}
