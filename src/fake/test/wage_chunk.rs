use super::*;

/// Tests that a two-rate session pays the mean of its rates.
///
/// Expected: Ok with a rate of 55.00 from rates 50 and 60
#[test]
fn two_rate_session_pays_mean_rate() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(
            fixture::session::entity_builder()
                .name("2025-2026 Fall-Winter")
                .dates(date(2025, 9, 1), date(2026, 4, 30))
                .rate1(50.0)
                .rate2(Some(60.0))
                .build(),
        )
        .with_staffing(0)
        .build()
        .unwrap();

    let chunks = generator().batch::<WageChunk>(&mut store, 1)?;

    assert_eq!(chunks[0].rate, 55.0);

    Ok(())
}

/// Tests that a single-rate session pays its first rate.
///
/// Expected: Ok with the session's `rate1`
#[test]
fn single_rate_session_pays_first_rate() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity_builder().rate1(47.25).build())
        .with_staffing(0)
        .build()
        .unwrap();

    let chunks = generator().batch::<WageChunk>(&mut store, 1)?;

    assert_eq!(chunks[0].rate, 47.25);

    Ok(())
}

/// Tests that a chunk covers its whole assignment.
///
/// Expected: Ok with contract dates and the position's estimated hours
#[test]
fn chunk_covers_assignment_contract() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_staffing(0)
        .build()
        .unwrap();

    let chunks = generator().batch::<WageChunk>(&mut store, 1)?;

    let assignment = &store.assignments[0];
    assert_eq!(chunks[0].assignment_index, 0);
    assert_eq!(chunks[0].start_date, assignment.contract_start);
    assert_eq!(chunks[0].end_date, assignment.contract_end);
    assert_eq!(chunks[0].hours, fixture::position::DEFAULT_HOURS);

    Ok(())
}

/// Tests that every assignment gets at most one chunk per batch.
///
/// Expected: Ok covering each of the three assignments once
#[test]
fn one_chunk_per_assignment() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_staffing(0)
        .with_staffing(0)
        .with_staffing(0)
        .build()
        .unwrap();

    let chunks = generator().batch::<WageChunk>(&mut store, 3)?;

    let mut assignments: Vec<_> = chunks.iter().map(|c| c.assignment_index).collect();
    assignments.sort_unstable();
    assert_eq!(assignments, [0, 1, 2]);

    Ok(())
}

/// Tests that a tag is named after the course of the paid position.
///
/// Expected: Ok with the position code minus its semester suffix
#[test]
fn reporting_tag_names_course() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_staffing(0)
        .with_wage_chunk(fixture::wage_chunk::entity_builder().assignment_index(0).build())
        .build()
        .unwrap();

    let tags = generator().batch::<ReportingTag>(&mut store, 1)?;

    assert_eq!(tags[0].name, "PHY241");
    assert_eq!(tags[0].wage_chunk_index, 0);

    Ok(())
}

/// Tests that tags for different courses get different names.
///
/// Expected: Ok with one tag per course
#[test]
fn reporting_tags_are_unique_by_name() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_staffing(0)
        .with_staffing(0)
        .with_wage_chunk(fixture::wage_chunk::entity_builder().assignment_index(0).build())
        .with_wage_chunk(fixture::wage_chunk::entity_builder().assignment_index(1).build())
        .build()
        .unwrap();

    let tags = generator().batch::<ReportingTag>(&mut store, 2)?;

    let mut names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["PHY241", "PHY242"]);

    Ok(())
}
