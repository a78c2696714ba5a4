//! Exercise book persistence with file locking.
//!
//! The book lives in one JSON file: `{"exercises": [ <record>... ]}`, each
//! record in the flat stored layout. Loading runs every record through the
//! record adapter and is strict: the first bad record aborts the whole load
//! with its typed error, so a damaged file never yields a silently smaller
//! book. Saving is atomic (tempfile, fsync, rename).

use crate::{Error, Exercise, ExerciseBook, Result, StoredExercise};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk envelope around the stored records
#[derive(Debug, Default, Serialize, Deserialize)]
struct BookFile {
    exercises: Vec<StoredExercise>,
}

/// Load an exercise book from a file with shared locking
///
/// Returns an empty book if the file doesn't exist. Any record that fails
/// reconstruction, or that duplicates an earlier one, fails the load.
pub fn load_book(path: &Path) -> Result<ExerciseBook> {
    if !path.exists() {
        tracing::info!("No book file found at {:?}, starting empty", path);
        return Ok(ExerciseBook::new());
    }

    let file = File::open(path)?;
    // Shared lock for reading
    file.lock_shared()?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read_result = reader.read_to_string(&mut contents);
    file.unlock()?;
    read_result?;

    let stored: BookFile = serde_json::from_str(&contents)?;

    let mut book = ExerciseBook::new();
    for record in stored.exercises {
        let exercise = match Exercise::try_from(record) {
            Ok(exercise) => exercise,
            Err(e) => {
                tracing::warn!("Rejecting book file {:?}: {}", path, e);
                return Err(e);
            }
        };
        book.add(exercise)?;
    }

    tracing::debug!("Loaded {} exercises from {:?}", book.len(), path);
    Ok(book)
}

/// Save an exercise book to a file
///
/// Atomically writes the book by:
/// 1. Projecting every entry to its stored record
/// 2. Writing to a locked temp file in the destination directory
/// 3. Syncing to disk
/// 4. Renaming over the original
pub fn save_book(book: &ExerciseBook, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Temp file in the same directory for atomic rename
    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "book path missing parent")
    })?)?;

    // Exclusive lock for the write; each writer has its own temp file, so
    // concurrent saves race only at the rename, where the last one wins
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let stored = BookFile {
            exercises: book.iter().map(StoredExercise::from).collect(),
        };
        let contents = serde_json::to_string(&stored)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    // Atomically replace the old book file
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {} exercises to {:?}", book.len(), path);
    Ok(())
}
