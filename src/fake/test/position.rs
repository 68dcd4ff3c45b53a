use super::*;

/// Store with one session of the given dates, one template for it and two
/// instructors.
fn staffed_session(start: NaiveDate, end: NaiveDate) -> RecordStore {
    TestBuilder::new()
        .with_session(fixture::session::entity_builder().dates(start, end).build())
        .with_position_template(fixture::position_template::entity())
        .with_instructor(fixture::instructor::entity())
        .with_instructor(
            fixture::instructor::entity_builder()
                .name("Ada", "Lovelace")
                .utorid("lovada01")
                .build(),
        )
        .build()
        .unwrap()
}

/// Tests that positions in a winter session carry the `H1-S` suffix.
///
/// Expected: Ok with every code ending in `H1-S`
#[test]
fn winter_positions_are_spring_half() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2026, 1, 1), date(2026, 4, 30));

    let positions = generator().batch::<Position>(&mut store, 10)?;

    assert!(positions.iter().all(|p| p.position_code.ends_with("H1-S")));

    Ok(())
}

/// Tests that positions in a fall session carry the `H1-F` suffix.
///
/// Expected: Ok with every code ending in `H1-F`
#[test]
fn fall_positions_are_fall_half() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2025, 9, 1), date(2025, 12, 31));

    let positions = generator().batch::<Position>(&mut store, 10)?;

    assert!(positions.iter().all(|p| p.position_code.ends_with("H1-F")));

    Ok(())
}

/// Tests that positions in a summer session carry the `Y1-Y` suffix.
///
/// Expected: Ok with every code ending in `Y1-Y`
#[test]
fn summer_positions_are_full_year() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2025, 5, 1), date(2025, 8, 31));

    let positions = generator().batch::<Position>(&mut store, 10)?;

    assert!(positions.iter().all(|p| p.position_code.ends_with("Y1-Y")));

    Ok(())
}

/// Tests the dates and counts a position copies from its session.
///
/// Verifies the estimated dates match the session, the ad runs through the
/// August before a September start, and advertised hours and counts match the
/// estimates.
///
/// Expected: Ok with consistent dates and counts
#[test]
fn position_follows_session_calendar() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2025, 9, 1), date(2025, 12, 31));

    let positions = generator().batch::<Position>(&mut store, 5)?;

    for position in &positions {
        assert_eq!(position.est_start_date, date(2025, 9, 1));
        assert_eq!(position.est_end_date, date(2025, 12, 31));
        assert_eq!(position.ad_open_date, date(2025, 8, 1));
        assert_eq!(position.ad_close_date, date(2025, 8, 31));
        assert_eq!(position.ad_hours_per_assignment, position.est_hours_per_assignment);
        assert_eq!(position.desired_num_assignments, position.ad_num_assignments);
        assert_eq!(position.position_type, fixture::position_template::DEFAULT_POSITION_TYPE);
    }

    Ok(())
}

/// Tests that generated numbers stay within their ranges.
///
/// Expected: Ok with hours, counts and enrollment in range
#[test]
fn position_numbers_are_in_range() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2025, 9, 1), date(2025, 12, 31));

    let positions = generator().batch::<Position>(&mut store, 20)?;

    for position in &positions {
        assert!((50..=80).contains(&position.est_hours_per_assignment));
        assert!((3..=15).contains(&position.ad_num_assignments));
        assert!((70..=1200).contains(&position.current_enrollment));
        assert!(position.current_waitlisted <= position.current_enrollment * 30 / 100);
    }

    Ok(())
}

/// Tests that instructor lists are non-empty, valid and free of repeats.
///
/// Expected: Ok with one or two distinct instructors per position
#[test]
fn instructors_are_distinct_and_valid() -> Result<(), GenerateError> {
    let mut store = staffed_session(date(2025, 9, 1), date(2025, 12, 31));

    let positions = generator().batch::<Position>(&mut store, 20)?;

    for position in &positions {
        let indexes = &position.instructor_indexes;
        assert!(!indexes.is_empty());
        assert!(indexes.iter().all(|&i| i < store.instructors.len()));
        let mut unique = indexes.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), indexes.len());
    }

    Ok(())
}

/// Tests that positions land only in sessions that have a template.
///
/// Expected: Ok with every position in the second session
#[test]
fn positions_only_in_sessions_with_templates() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_session(
            fixture::session::entity_builder()
                .name("2026 Winter")
                .dates(date(2026, 1, 1), date(2026, 4, 30))
                .build(),
        )
        .with_position_template(
            fixture::position_template::entity_builder()
                .position_type("oto")
                .session_index(1)
                .build(),
        )
        .with_instructor(fixture::instructor::entity())
        .build()
        .unwrap();

    let positions = generator().batch::<Position>(&mut store, 10)?;

    assert!(positions.iter().all(|p| p.session_index == 1));
    assert!(positions.iter().all(|p| p.position_type == "oto"));

    Ok(())
}

/// Tests the position code shape for a known course title.
///
/// Expected: three upper-cased letters, the level and the suffix
#[test]
fn course_code_joins_prefix_level_and_semester() {
    assert_eq!(
        builder::position::course_code("Physics 241", "H1-F"),
        "PHY241H1-F"
    );
    assert_eq!(
        builder::position::course_code("organic chemistry 302", "Y1-Y"),
        "ORG302Y1-Y"
    );
}

/// Tests the UTORid shape for a known name.
///
/// Expected: lowercase name parts followed by two digits
#[test]
fn utorid_combines_names_and_digits() {
    let mut faker = RngFaker::seeded(SEED);

    let utorid = builder::person::utorid(&mut faker, "Ada", "Lovelace");

    assert_eq!(utorid.len(), 8);
    assert!(utorid.starts_with("lovada"));
    assert!(utorid[6..].chars().all(|c| c.is_ascii_digit()));

    let short = builder::person::utorid(&mut faker, "Jo", "Li");
    assert!(short.starts_with("lijo"));
    assert_eq!(short.len(), 6);
}
