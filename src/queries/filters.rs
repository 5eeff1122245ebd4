//! Reusable predicate builders for roster queries.
//!
//! Each function closes over its threshold and returns a predicate on
//! [`Student`], so queries compose them instead of repeating field access.

use crate::roster::{Gender, Student};

/// Matches students whose average grade is strictly above `min`.
pub fn min_average_grade(min: f64) -> impl Fn(&Student) -> bool {
    move |s| s.average_grade > min
}

/// Matches students whose average grade equals `grade` exactly.
/// Roster grades come off the wire as short decimal literals, so exact
/// comparison is intended.
pub fn exact_average_grade(grade: f64) -> impl Fn(&Student) -> bool {
    move |s| s.average_grade == grade
}

/// Matches students of the given gender.
pub fn gender_is(gender: Gender) -> impl Fn(&Student) -> bool {
    move |s| s.gender == gender
}

/// Matches students living in `city` (exact, case-sensitive).
pub fn city_is(city: &str) -> impl Fn(&Student) -> bool + '_ {
    move |s| s.city == city
}

/// Matches students strictly older than `age`.
pub fn min_age(age: u32) -> impl Fn(&Student) -> bool {
    move |s| s.age > age
}

/// Matches students whose first name starts with `prefix` (case-sensitive).
pub fn first_name_starts_with(prefix: &str) -> impl Fn(&Student) -> bool + '_ {
    move |s| s.first_name.starts_with(prefix)
}
