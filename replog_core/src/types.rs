//! Core domain types for the replog exercise log.
//!
//! This module defines the fundamental types used throughout the system:
//! - Value objects for the five exercise fields (name, description, date,
//!   calories, muscle)
//! - The muscle-list string round-trip rules
//! - The Exercise entity itself
//!
//! Every value object validates on construction, so an `Exercise` that
//! exists satisfies all five field constraints. None of these types
//! implement `Deserialize`; untrusted data enters only through the record
//! adapter in [`crate::record`].

use crate::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\S.*$").expect("valid description regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static CALORIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid calories regex"));
static MUSCLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid muscle regex"));

// ============================================================================
// Name
// ============================================================================

/// Validated exercise name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Record key this field is stored under
    pub const FIELD: &'static str = "name";

    /// Constraint description, surfaced verbatim in validation errors
    pub const CONSTRAINTS: &'static str =
        "names contain only alphanumeric characters and spaces, and must not be blank";

    /// Format predicate over a raw string
    pub fn is_valid(raw: &str) -> bool {
        NAME_RE.is_match(raw)
    }

    /// Validate and construct; the only way to obtain a `Name`
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(Error::InvalidField {
                field: Self::FIELD,
                constraint: Self::CONSTRAINTS,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Description
// ============================================================================

/// Validated free-form exercise description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Record key this field is stored under
    pub const FIELD: &'static str = "description";

    /// Constraint description, surfaced verbatim in validation errors
    pub const CONSTRAINTS: &'static str =
        "descriptions can take any value, but must not be blank or start with whitespace";

    /// Format predicate over a raw string
    pub fn is_valid(raw: &str) -> bool {
        DESCRIPTION_RE.is_match(raw)
    }

    /// Validate and construct; the only way to obtain a `Description`
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(Error::InvalidField {
                field: Self::FIELD,
                constraint: Self::CONSTRAINTS,
            });
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ExerciseDate
// ============================================================================

/// Validated calendar date an exercise was performed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Record key this field is stored under
    pub const FIELD: &'static str = "date";

    /// Constraint description, surfaced verbatim in validation errors
    pub const CONSTRAINTS: &'static str =
        "dates take the form YYYY-MM-DD and must be real calendar dates";

    /// Format predicate over a raw string
    ///
    /// The regex pins the zero-padded shape; chrono rejects shapes that are
    /// not real dates (e.g. `2023-02-29`).
    pub fn is_valid(raw: &str) -> bool {
        Self::parse_date(raw).is_some()
    }

    /// Validate and construct; the only way to obtain an `ExerciseDate`
    pub fn new(raw: &str) -> Result<Self> {
        match Self::parse_date(raw) {
            Some(date) => Ok(Self(date)),
            None => Err(Error::InvalidField {
                field: Self::FIELD,
                constraint: Self::CONSTRAINTS,
            }),
        }
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        if !DATE_RE.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero-padded ISO form; formatting a parsed date reproduces its
        // input byte for byte.
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ============================================================================
// Calories
// ============================================================================

/// Validated non-negative calorie count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calories(u32);

impl Calories {
    /// Record key this field is stored under
    pub const FIELD: &'static str = "calories";

    /// Constraint description, surfaced verbatim in validation errors
    pub const CONSTRAINTS: &'static str =
        "calorie counts are non-negative whole numbers";

    /// Format predicate over a raw string
    pub fn is_valid(raw: &str) -> bool {
        Self::parse_count(raw).is_some()
    }

    /// Validate and construct; the only way to obtain `Calories`
    pub fn new(raw: &str) -> Result<Self> {
        match Self::parse_count(raw) {
            Some(count) => Ok(Self(count)),
            None => Err(Error::InvalidField {
                field: Self::FIELD,
                constraint: Self::CONSTRAINTS,
            }),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    fn parse_count(raw: &str) -> Option<u32> {
        if !CALORIES_RE.is_match(raw) {
            return None;
        }
        // The digits-only gate still admits counts too large for u32.
        raw.parse::<u32>().ok()
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Muscle
// ============================================================================

/// A single validated muscle name (e.g. "biceps", "lower back")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Muscle(String);

impl Muscle {
    /// Record key the flattened muscle list is stored under
    pub const LIST_FIELD: &'static str = "musclesWorked";

    /// Format predicate over a single muscle token
    pub fn is_valid(raw: &str) -> bool {
        MUSCLE_RE.is_match(raw)
    }

    /// Validate and construct a single muscle
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(Error::InvalidMuscle { token: raw });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical string-to-list rule for stored muscle lists
    ///
    /// The whole string is trimmed first, so an empty or whitespace-only
    /// string is the empty list, not an error. Otherwise the string splits
    /// on `,`, each token is trimmed and validated independently, and the
    /// first bad token fails the whole parse.
    pub fn parse_list(raw: &str) -> Result<Vec<Muscle>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',').map(|token| Muscle::new(token.trim())).collect()
    }

    /// Canonical list-to-string rule for stored muscle lists
    pub fn list_to_string(muscles: &[Muscle]) -> String {
        muscles
            .iter()
            .map(Muscle::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Muscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// A validated exercise entry
///
/// All fields are value objects, so any `Exercise` you can hold is valid in
/// all five fields. Two exercises are equal when all five fields are equal;
/// there is no identity beyond that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub description: Description,
    pub date: ExerciseDate,
    pub calories: Calories,
    pub muscles_worked: Vec<Muscle>,
}

impl Exercise {
    /// The flattened, canonical form of the muscle list
    pub fn muscles_description(&self) -> String {
        Muscle::list_to_string(&self.muscles_worked)
    }
}
