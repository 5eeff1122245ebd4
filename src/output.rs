//! Output formatting and persistence for roster reports.
//!
//! Supports labeled per-query lines, JSON serialization, and CSV append.

use anyhow::Result;
use tracing::{debug, info};

use crate::queries::report::{RosterReport, RosterSummary};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Emits one labeled line per query result.
pub fn print_report(report: &RosterReport) {
    info!(
        count = report.high_performers.len(),
        "Students with average grade above 3: {:?}", report.high_performers
    );
    info!(
        count = report.top_female_students.len(),
        "Female students with average grade 5: {:?}", report.top_female_students
    );
    info!(
        count = report.adult_males_in_skopje.len(),
        "Male students in Skopje over 18: {:?}", report.adult_males_in_skopje
    );
    match report.senior_female_average {
        Some(avg) => info!("Average grade of female students over 24: {avg:.2}"),
        None => info!("Average grade of female students over 24: no matching students"),
    }
    info!(
        count = report.male_b_students.len(),
        "Male students starting with B and average grade over 2: {:?}", report.male_b_students
    );
}

/// Logs the full report as pretty-printed JSON.
pub fn print_json(report: &RosterReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`RosterSummary`] row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &str, summary: &RosterSummary) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV summary row");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_summary() -> RosterSummary {
        let report = RosterReport::from_roster(&[]).with_source("test");
        RosterSummary::new(&report, &[])
    }

    #[test]
    fn test_print_report_does_not_panic() {
        let report = RosterReport::from_roster(&[]);
        print_report(&report);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = RosterReport::from_roster(&[]);
        print_json(&report).unwrap();
    }

    #[test]
    fn test_append_summary_creates_file() {
        let path = temp_path("roster_report_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        append_summary(&path, &sample_summary()).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_summary_writes_header_once() {
        let path = temp_path("roster_report_test_header.csv");
        let _ = fs::remove_file(&path);

        append_summary(&path, &sample_summary()).unwrap();
        append_summary(&path, &sample_summary()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Header line should appear exactly once
        let header_count = content.lines().filter(|l| l.contains("timestamp")).count();
        assert_eq!(header_count, 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_summary_two_rows() {
        let path = temp_path("roster_report_test_rows.csv");
        let _ = fs::remove_file(&path);

        append_summary(&path, &sample_summary()).unwrap();
        append_summary(&path, &sample_summary()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // 1 header + 2 data rows = 3 lines (last may be empty due to trailing newline)
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        fs::remove_file(&path).unwrap();
    }
}
