//! The five roster queries and the report types built from them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::queries::filters::{
    city_is, exact_average_grade, first_name_starts_with, gender_is, min_age, min_average_grade,
};
use crate::queries::utility::{mean, stddev};
use crate::roster::{Gender, Student};

const HIGH_PERFORMER_MIN_GRADE: f64 = 3.0;
const TOP_GRADE: f64 = 5.0;
const ADULT_CITY: &str = "Skopje";
const ADULT_MIN_AGE: u32 = 18;
const SENIOR_MIN_AGE: u32 = 24;
const NAME_PREFIX: &str = "B";
const PREFIX_MIN_GRADE: f64 = 2.0;

/// All students with an average grade strictly above `min_grade`,
/// roster order preserved.
pub fn high_performers(students: &[Student], min_grade: f64) -> Vec<&Student> {
    let by_grade = min_average_grade(min_grade);
    students.iter().filter(|s| by_grade(s)).collect()
}

/// First names of students of `gender` whose average grade equals `grade`.
pub fn top_scorers<'a>(students: &'a [Student], gender: Gender, grade: f64) -> Vec<&'a str> {
    let by_gender = gender_is(gender);
    let by_grade = exact_average_grade(grade);

    students
        .iter()
        .filter(|s| by_gender(s) && by_grade(s))
        .map(|s| s.first_name.as_str())
        .collect()
}

/// Full names of students of `gender` living in `city` and strictly older
/// than `over_age`.
pub fn adults_in_city(
    students: &[Student],
    gender: Gender,
    city: &str,
    over_age: u32,
) -> Vec<String> {
    let by_gender = gender_is(gender);
    let by_city = city_is(city);
    let by_age = min_age(over_age);

    students
        .iter()
        .filter(|s| by_gender(s) && by_city(s) && by_age(s))
        .map(Student::full_name)
        .collect()
}

/// Mean average grade of students of `gender` strictly older than
/// `over_age`. `None` when no student matches.
pub fn average_grade_over_age(students: &[Student], gender: Gender, over_age: u32) -> Option<f64> {
    let by_gender = gender_is(gender);
    let by_age = min_age(over_age);

    let grades: Vec<f64> = students
        .iter()
        .filter(|s| by_gender(s) && by_age(s))
        .map(|s| s.average_grade)
        .collect();

    mean(&grades)
}

/// First names of students of `gender` whose first name starts with
/// `prefix` and whose average grade is strictly above `min_grade`.
pub fn named_with_prefix<'a>(
    students: &'a [Student],
    gender: Gender,
    prefix: &str,
    min_grade: f64,
) -> Vec<&'a str> {
    let by_gender = gender_is(gender);
    let by_prefix = first_name_starts_with(prefix);
    let by_grade = min_average_grade(min_grade);

    students
        .iter()
        .filter(|s| by_gender(s) && by_prefix(s) && by_grade(s))
        .map(|s| s.first_name.as_str())
        .collect()
}

/// Results of one report run over a roster.
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub generated_at: DateTime<Utc>,
    pub source: Option<String>,
    pub total_students: usize,

    pub high_performers: Vec<Student>,
    pub top_female_students: Vec<String>,
    pub adult_males_in_skopje: Vec<String>,
    /// `None` when the roster has no female students over 24.
    pub senior_female_average: Option<f64>,
    pub male_b_students: Vec<String>,
}

impl RosterReport {
    /// Runs all five queries over `students`.
    pub fn from_roster(students: &[Student]) -> Self {
        RosterReport {
            generated_at: Utc::now(),
            source: None,
            total_students: students.len(),
            high_performers: high_performers(students, HIGH_PERFORMER_MIN_GRADE)
                .into_iter()
                .cloned()
                .collect(),
            top_female_students: top_scorers(students, Gender::Female, TOP_GRADE)
                .into_iter()
                .map(str::to_string)
                .collect(),
            adult_males_in_skopje: adults_in_city(
                students,
                Gender::Male,
                ADULT_CITY,
                ADULT_MIN_AGE,
            ),
            senior_female_average: average_grade_over_age(
                students,
                Gender::Female,
                SENIOR_MIN_AGE,
            ),
            male_b_students: named_with_prefix(
                students,
                Gender::Male,
                NAME_PREFIX,
                PREFIX_MIN_GRADE,
            )
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }

    /// Set the source label (URL or file path the roster came from).
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// One flat row per report run, appended to a CSV file for tracking runs
/// over time.
#[derive(Debug, Serialize)]
pub struct RosterSummary {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub total_students: usize,
    pub high_performers: usize,
    pub top_female_students: usize,
    pub adult_males_in_skopje: usize,
    pub senior_female_average: Option<f64>,
    pub male_b_students: usize,
    pub grade_mean: f64,
    pub grade_stddev: f64,
}

impl RosterSummary {
    /// Collapses a [`RosterReport`] into counts, adding roster-wide grade
    /// statistics.
    pub fn new(report: &RosterReport, students: &[Student]) -> Self {
        let grades: Vec<f64> = students.iter().map(|s| s.average_grade).collect();
        let grade_mean = mean(&grades).unwrap_or(0.0);
        let grade_stddev = stddev(&grades, grade_mean);

        RosterSummary {
            timestamp: report.generated_at,
            source: report.source.clone(),
            total_students: report.total_students,
            high_performers: report.high_performers.len(),
            top_female_students: report.top_female_students.len(),
            adult_males_in_skopje: report.adult_males_in_skopje.len(),
            senior_female_average: report.senior_female_average,
            male_b_students: report.male_b_students.len(),
            grade_mean,
            grade_stddev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Student> {
        vec![
            Student {
                first_name: "Ana".to_string(),
                last_name: "Ivanova".to_string(),
                gender: Gender::Female,
                city: "Skopje".to_string(),
                age: 25,
                average_grade: 5.0,
            },
            Student {
                first_name: "Bojan".to_string(),
                last_name: "Petrov".to_string(),
                gender: Gender::Male,
                city: "Skopje".to_string(),
                age: 20,
                average_grade: 3.0,
            },
        ]
    }

    #[test]
    fn test_high_performers_excludes_boundary() {
        let roster = sample_roster();
        // Ana (5.0) qualifies; Bojan sits exactly on 3.0 and does not.
        let result = high_performers(&roster, 3.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].first_name, "Ana");
    }

    #[test]
    fn test_top_scorers_returns_first_names() {
        let roster = sample_roster();
        assert_eq!(top_scorers(&roster, Gender::Female, 5.0), vec!["Ana"]);
        assert!(top_scorers(&roster, Gender::Male, 5.0).is_empty());
    }

    #[test]
    fn test_adults_in_city_full_names() {
        let roster = sample_roster();
        assert_eq!(
            adults_in_city(&roster, Gender::Male, "Skopje", 18),
            vec!["Bojan Petrov"]
        );
        assert!(adults_in_city(&roster, Gender::Male, "Bitola", 18).is_empty());
    }

    #[test]
    fn test_average_grade_over_age() {
        let roster = sample_roster();
        assert_eq!(average_grade_over_age(&roster, Gender::Female, 24), Some(5.0));
        // No male student over 24 in the sample.
        assert_eq!(average_grade_over_age(&roster, Gender::Male, 24), None);
    }

    #[test]
    fn test_named_with_prefix() {
        let roster = sample_roster();
        assert_eq!(named_with_prefix(&roster, Gender::Male, "B", 2.0), vec!["Bojan"]);
        assert!(named_with_prefix(&roster, Gender::Male, "Z", 2.0).is_empty());
    }

    #[test]
    fn test_report_matches_sample_roster() {
        let roster = sample_roster();
        let report = RosterReport::from_roster(&roster);

        assert_eq!(report.total_students, 2);
        // Boundary is strict, so only Ana counts as a high performer here;
        // with grades {5.0, 3.0} Bojan is excluded.
        assert_eq!(report.high_performers.len(), 1);
        assert_eq!(report.top_female_students, vec!["Ana"]);
        assert_eq!(report.adult_males_in_skopje, vec!["Bojan Petrov"]);
        assert_eq!(report.senior_female_average, Some(5.0));
        assert_eq!(report.male_b_students, vec!["Bojan"]);
    }

    #[test]
    fn test_underage_low_grade_boris_is_excluded() {
        let roster = vec![Student {
            first_name: "Boris".to_string(),
            last_name: "Stojanov".to_string(),
            gender: Gender::Male,
            city: "Skopje".to_string(),
            age: 17,
            average_grade: 1.0,
        }];

        let report = RosterReport::from_roster(&roster);

        // Age 17 is not over 18, grade 1 is not over 2.
        assert!(report.adult_males_in_skopje.is_empty());
        assert!(report.male_b_students.is_empty());
    }

    #[test]
    fn test_empty_roster_report() {
        let report = RosterReport::from_roster(&[]);

        assert_eq!(report.total_students, 0);
        assert!(report.high_performers.is_empty());
        assert!(report.top_female_students.is_empty());
        assert!(report.adult_males_in_skopje.is_empty());
        assert_eq!(report.senior_female_average, None);
        assert!(report.male_b_students.is_empty());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let roster = sample_roster();
        let first = RosterReport::from_roster(&roster);
        let second = RosterReport::from_roster(&roster);

        assert_eq!(first.high_performers, second.high_performers);
        assert_eq!(first.top_female_students, second.top_female_students);
        assert_eq!(first.senior_female_average, second.senior_female_average);
    }

    #[test]
    fn test_summary_counts_and_grade_stats() {
        let roster = sample_roster();
        let report = RosterReport::from_roster(&roster).with_source("sample");
        let summary = RosterSummary::new(&report, &roster);

        assert_eq!(summary.source.as_deref(), Some("sample"));
        assert_eq!(summary.total_students, 2);
        assert_eq!(summary.high_performers, 1);
        assert_eq!(summary.top_female_students, 1);
        assert_eq!(summary.senior_female_average, Some(5.0));
        assert_eq!(summary.grade_mean, 4.0);
        assert!((summary.grade_stddev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_roster_summary() {
        let report = RosterReport::from_roster(&[]);
        let summary = RosterSummary::new(&report, &[]);

        assert_eq!(summary.senior_female_average, None);
        assert_eq!(summary.grade_mean, 0.0);
        assert_eq!(summary.grade_stddev, 0.0);
    }
}
