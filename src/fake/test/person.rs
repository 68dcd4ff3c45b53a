use super::*;

/// Tests the identity fields of generated applicants.
///
/// Verifies the UTORid shape, the email built from the UTORid and the
/// ten-digit student number.
///
/// Expected: Ok with well-formed applicants
#[test]
fn applicant_fields_are_well_formed() -> Result<(), GenerateError> {
    let mut store = RecordStore::new();

    let applicants = generator().batch::<Applicant>(&mut store, 20)?;

    for applicant in &applicants {
        let utorid = &applicant.utorid;
        assert_eq!(utorid, &utorid.to_lowercase());
        assert!(utorid.chars().rev().take(2).all(|c| c.is_ascii_digit()));
        assert!(applicant.email.starts_with(&format!("{}@", utorid)));

        let number = &applicant.student_number;
        assert_eq!(number.len(), 10);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        assert!(!number.starts_with('0'));
        assert!(!applicant.phone.is_empty());
    }

    Ok(())
}

/// Tests that instructor emails are built from the full name.
///
/// Expected: Ok with the lower-cased name as the local part
#[test]
fn instructor_email_uses_name() -> Result<(), GenerateError> {
    let mut store = RecordStore::new();

    let instructors = generator().batch::<Instructor>(&mut store, 10)?;

    for instructor in &instructors {
        let local: String = format!("{}{}", instructor.first_name, instructor.last_name)
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        assert!(instructor.email.starts_with(&format!("{}@", local)));
    }

    Ok(())
}

/// Tests the program and year in program of generated applications.
///
/// Expected: Ok with known programs and years from 1 to 10
#[test]
fn application_fields_are_in_range() -> Result<(), GenerateError> {
    let mut store = TestBuilder::new()
        .with_session(fixture::session::entity())
        .with_applicant(fixture::applicant::entity())
        .with_applicant(fixture::applicant::entity_builder().utorid("hopgra02").build())
        .build()
        .unwrap();

    let applications = generator().batch::<Application>(&mut store, 2)?;

    for application in &applications {
        assert!(builder::application::PROGRAMS.contains(&application.program.as_str()));
        assert!((1..=10).contains(&application.yip));
    }

    Ok(())
}

/// Tests that punctuation counts toward the three characters taken from a name.
///
/// Expected: `"O'Neil"` contributes `on`, not `one`
#[test]
fn utorid_truncates_before_dropping_punctuation() {
    let mut faker = RngFaker::seeded(SEED);

    let utorid = builder::person::utorid(&mut faker, "Jo", "O'Neil");

    assert!(utorid.starts_with("onjo"), "{}", utorid);
    assert_eq!(utorid.len(), 6);
}
