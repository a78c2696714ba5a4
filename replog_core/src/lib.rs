#![forbid(unsafe_code)]

//! Core domain model and storage round-trip for the replog exercise log.
//!
//! This crate provides:
//! - Validated value objects for the five exercise fields, and the
//!   `Exercise` entity built from them
//! - The stored-record adapter (projection to the flat persisted form,
//!   validating reconstruction back from it)
//! - The exercise book collection
//! - Persistence (JSON book file, CSV export)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod record;
pub mod book;
pub mod store;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use record::StoredExercise;
pub use book::ExerciseBook;
pub use store::{load_book, save_book};
pub use export::book_to_csv;
pub use config::Config;
