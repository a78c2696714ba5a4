//! CSV export of the exercise book.
//!
//! Produces a flat, spreadsheet-friendly view of the book. Export is a
//! one-way projection; CSV files are never read back in.

use crate::{Exercise, ExerciseBook, Result};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    name: String,
    description: String,
    date: String,
    calories: u32,
    muscles_worked: String,
}

impl From<&Exercise> for CsvRow {
    fn from(exercise: &Exercise) -> Self {
        CsvRow {
            name: exercise.name.to_string(),
            description: exercise.description.to_string(),
            date: exercise.date.to_string(),
            calories: exercise.calories.value(),
            muscles_worked: exercise.muscles_description(),
        }
    }
}

/// Write the whole book to a CSV file, replacing any previous export
///
/// Returns the number of rows written (headers not counted).
pub fn book_to_csv(book: &ExerciseBook, path: &Path) -> Result<usize> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    // The header row goes out even when the book is empty
    writer.write_record(["name", "description", "date", "calories", "muscles_worked"])?;
    for exercise in book.iter() {
        writer.serialize(CsvRow::from(exercise))?;
    }

    // Flush and sync to disk
    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} exercises to {:?}", book.len(), path);
    Ok(book.len())
}
