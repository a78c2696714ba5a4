//! Stored-record adapter for exercises.
//!
//! An [`Exercise`] is persisted as a flat set of optional strings
//! ([`StoredExercise`]). Projection (entity → record) is a pure, total
//! conversion; reconstruction (record → entity) runs the full validation
//! pipeline and fails on the first offending field. This is the only path
//! by which persisted data becomes domain entities, so everything past it
//! can assume validity.

use crate::{Calories, Description, Error, Exercise, ExerciseDate, Muscle, Name, Result};
use serde::{Deserialize, Serialize};

/// Flat string form of an exercise, as written to durable storage.
///
/// No invariants hold here: any field may be absent or malformed until
/// reconstruction has accepted the record. A record is transient; it is
/// created immediately before serialization and consumed immediately
/// during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredExercise {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub calories: Option<String>,
    #[serde(rename = "musclesWorked")]
    pub muscles_worked: Option<String>,
}

/// Validated-parse seam for the scalar record fields.
///
/// Keeps the presence/format/construct chain in one place instead of
/// restating it per field; evaluation order stays visible as the call
/// sequence in `try_from`.
trait Field: Sized {
    /// Record key, used for missing-field attribution
    const KEY: &'static str;

    /// Validate a present raw string and construct the value object
    fn parse(raw: &str) -> Result<Self>;
}

impl Field for Name {
    const KEY: &'static str = Name::FIELD;

    fn parse(raw: &str) -> Result<Self> {
        Name::new(raw)
    }
}

impl Field for Description {
    const KEY: &'static str = Description::FIELD;

    fn parse(raw: &str) -> Result<Self> {
        Description::new(raw)
    }
}

impl Field for ExerciseDate {
    const KEY: &'static str = ExerciseDate::FIELD;

    fn parse(raw: &str) -> Result<Self> {
        ExerciseDate::new(raw)
    }
}

impl Field for Calories {
    const KEY: &'static str = Calories::FIELD;

    fn parse(raw: &str) -> Result<Self> {
        Calories::new(raw)
    }
}

/// Presence check, then the field's own format check, in that order
fn required<T: Field>(raw: Option<&str>) -> Result<T> {
    match raw {
        Some(value) => T::parse(value),
        None => Err(Error::MissingField(T::KEY)),
    }
}

impl From<&Exercise> for StoredExercise {
    /// Projection: pure and total, any valid entity always projects
    fn from(exercise: &Exercise) -> Self {
        StoredExercise {
            name: Some(exercise.name.to_string()),
            description: Some(exercise.description.to_string()),
            date: Some(exercise.date.to_string()),
            calories: Some(exercise.calories.to_string()),
            muscles_worked: Some(exercise.muscles_description()),
        }
    }
}

impl TryFrom<StoredExercise> for Exercise {
    type Error = Error;

    /// Reconstruction: all-or-nothing validation of a stored record
    ///
    /// Fields are checked in fixed order (name, description, date,
    /// calories, musclesWorked) and the first violation wins, so callers
    /// always see one actionable error per record. The muscle list is
    /// checked for presence here, then handed to [`Muscle::parse_list`],
    /// whose own error passes through unchanged.
    fn try_from(record: StoredExercise) -> Result<Self> {
        let name: Name = required(record.name.as_deref())?;
        let description: Description = required(record.description.as_deref())?;
        let date: ExerciseDate = required(record.date.as_deref())?;
        let calories: Calories = required(record.calories.as_deref())?;

        let muscles_raw = record
            .muscles_worked
            .as_deref()
            .ok_or(Error::MissingField(Muscle::LIST_FIELD))?;
        let muscles_worked = Muscle::parse_list(muscles_raw)?;

        Ok(Exercise {
            name,
            description,
            date,
            calories,
            muscles_worked,
        })
    }
}
