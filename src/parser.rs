//! JSON parser and ingestion validation for student rosters.

use anyhow::{Context, Result, bail};

use crate::roster::Student;

/// Decodes a JSON array of [`Student`] records from raw bytes and validates
/// every record before any of them is used.
///
/// Validation is fail-fast: the first malformed record aborts the whole
/// ingestion, so downstream queries only ever see well-formed data.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid JSON array of student
/// objects, if a field is missing or has the wrong type, or if a record's
/// `averageGrade` falls outside the 1-5 grading scale.
pub fn parse_roster(bytes: &[u8]) -> Result<Vec<Student>> {
    let students: Vec<Student> =
        serde_json::from_slice(bytes).context("roster is not a valid JSON array of students")?;

    validate(&students)?;

    Ok(students)
}

fn validate(students: &[Student]) -> Result<()> {
    for (idx, s) in students.iter().enumerate() {
        if !s.average_grade.is_finite() || !(1.0..=5.0).contains(&s.average_grade) {
            bail!(
                "record {idx} ({}): averageGrade {} is outside the 1-5 grading scale",
                s.full_name(),
                s.average_grade
            );
        }
    }
    Ok(())
}
