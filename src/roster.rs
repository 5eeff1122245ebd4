//! Typed student records as served by the roster endpoint.

use serde::{Deserialize, Serialize};

/// Gender as it appears on the wire. Any other value is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A single student record.
///
/// The roster endpoint serves camelCase field names; `serde` renames map
/// them onto the usual Rust snake_case fields. Records are read-only once
/// ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub city: String,
    pub age: u32,
    pub average_grade: f64,
}

impl Student {
    /// Returns `"firstName lastName"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
