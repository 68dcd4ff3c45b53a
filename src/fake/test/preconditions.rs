use super::*;

/// Tests that positions cannot be built without position templates.
///
/// Expected: Err(EmptyProducer) naming position templates
#[test]
fn positions_need_templates() {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_instructor(fixture::instructor::entity())
        .build()
        .unwrap();

    let result = generator().batch::<Position>(&mut store, 1);

    assert!(matches!(
        result,
        Err(GenerateError::EmptyProducer {
            kind: EntityKind::Positions,
            producer: "position_templates",
        })
    ));
}

/// Tests that positions cannot be built without instructors.
///
/// Expected: Err(EmptyProducer) naming instructors
#[test]
fn positions_need_instructors() {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_position_template(fixture::position_template::entity())
        .build()
        .unwrap();

    let result = generator().batch::<Position>(&mut store, 1);

    assert!(matches!(
        result,
        Err(GenerateError::EmptyProducer {
            producer: "instructors",
            ..
        })
    ));
}

/// Tests that applications need applicants.
///
/// Expected: Err(EmptyProducer) naming applicants
#[test]
fn applications_need_applicants() {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .build()
        .unwrap();

    let result = generator().batch::<Application>(&mut store, 1);

    assert!(matches!(
        result,
        Err(GenerateError::EmptyProducer {
            producer: "applicants",
            ..
        })
    ));
}

/// Tests that an empty template source cannot back position templates.
///
/// Expected: Err(EmptyProducer) naming the available templates
#[test]
fn position_templates_need_available_templates() {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .build()
        .unwrap();
    let mut generator =
        Generator::new(RngFaker::seeded(SEED), StaticTemplates::default()).start_year(2025);

    let result = generator.batch::<PositionTemplate>(&mut store, 1);

    assert!(matches!(
        result,
        Err(GenerateError::EmptyProducer {
            producer: context::AVAILABLE_TEMPLATES,
            ..
        })
    ));
}

/// Tests that a zero count needs no producers at all.
///
/// Expected: Ok with no records
#[test]
fn zero_count_builds_nothing() -> Result<(), GenerateError> {
    let mut store = RecordStore::new();

    let tags = generator().batch::<ReportingTag>(&mut store, 0)?;

    assert!(tags.is_empty());

    Ok(())
}

/// Tests that a failed batch leaves the store's working state untouched.
///
/// One session supports only as many position templates as there are
/// distinct words, so a large request fails after fetching the template list.
///
/// Expected: Err(Exhausted) with no cached templates and an unchanged cursor
#[test]
fn failed_batch_commits_nothing() -> Result<(), GenerateError> {
    let mut store = RecordStore::new();
    let mut generator = generator().max_attempts(200);
    generator.populate(&mut store, EntityKind::Sessions, 1)?;
    let cursor = store.session_cursor;

    let result = generator.batch::<PositionTemplate>(&mut store, 500);

    assert!(matches!(result, Err(GenerateError::Exhausted { .. })));
    assert_eq!(store.available_templates, None);
    assert_eq!(store.session_cursor, cursor);

    Ok(())
}

/// Tests that a dangling index in the store surfaces as an error.
///
/// Expected: Err(DanglingReferences) naming the broken field
#[test]
fn dangling_assignment_is_reported() {
    let mut store = RecordStore::new();
    store.assignments.push(fixture::assignment::entity_builder().position_index(7).build());

    let result = generator().batch::<WageChunk>(&mut store, 1);

    match result {
        Err(GenerateError::DanglingReferences(dangling)) => {
            assert_eq!(dangling.len(), 1);
            assert_eq!(dangling[0].field, "position_index");
            assert_eq!(dangling[0].value, 7);
        }
        other => panic!("expected dangling references, got {:?}", other),
    }
}
