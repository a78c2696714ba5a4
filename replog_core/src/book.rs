//! The in-memory exercise book.
//!
//! An [`ExerciseBook`] is the validated, ordered collection backing one
//! data file. Entries are [`Exercise`] values, so everything in a book is
//! already valid; the book only enforces collection-level rules
//! (no duplicates, index bounds).

use crate::{Error, Exercise, Result};

/// Ordered collection of validated exercises
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseBook {
    exercises: Vec<Exercise>,
}

impl ExerciseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exercise, rejecting one equal in all five fields to an
    /// existing entry
    pub fn add(&mut self, exercise: Exercise) -> Result<()> {
        if self.contains(&exercise) {
            return Err(Error::DuplicateExercise);
        }
        self.exercises.push(exercise);
        Ok(())
    }

    /// Remove and return the exercise at a 0-based index
    pub fn remove(&mut self, index: usize) -> Result<Exercise> {
        if index >= self.exercises.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.exercises.len(),
            });
        }
        Ok(self.exercises.remove(index))
    }

    pub fn contains(&self, exercise: &Exercise) -> bool {
        self.exercises.contains(exercise)
    }

    /// Case-insensitive substring search over exercise names
    pub fn find_by_name(&self, keyword: &str) -> Vec<&Exercise> {
        let keyword = keyword.to_lowercase();
        self.exercises
            .iter()
            .filter(|e| e.name.as_str().to_lowercase().contains(&keyword))
            .collect()
    }

    /// Sum of calorie counts over every entry
    pub fn total_calories(&self) -> u64 {
        self.exercises
            .iter()
            .map(|e| u64::from(e.calories.value()))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Calories, Description, ExerciseDate, Muscle, Name};

    fn exercise(name: &str, calories: &str) -> Exercise {
        Exercise {
            name: Name::new(name).unwrap(),
            description: Description::new("logged for testing").unwrap(),
            date: ExerciseDate::new("2024-06-01").unwrap(),
            calories: Calories::new(calories).unwrap(),
            muscles_worked: Muscle::parse_list("quads").unwrap(),
        }
    }

    #[test]
    fn test_add_and_len() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Squat", "150")).unwrap();
        book.add(exercise("Row", "120")).unwrap();
        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Squat", "150")).unwrap();

        let err = book.add(exercise("Squat", "150")).unwrap_err();
        assert!(matches!(err, Error::DuplicateExercise));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_same_name_different_calories_is_not_duplicate() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Squat", "150")).unwrap();
        book.add(exercise("Squat", "180")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove_returns_entry() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Squat", "150")).unwrap();
        book.add(exercise("Row", "120")).unwrap();

        let removed = book.remove(0).unwrap();
        assert_eq!(removed.name.as_str(), "Squat");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Squat", "150")).unwrap();

        let err = book.remove(3).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 3, len: 1 }));
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let mut book = ExerciseBook::new();
        book.add(exercise("Bench Press", "200")).unwrap();
        book.add(exercise("Overhead Press", "140")).unwrap();
        book.add(exercise("Squat", "150")).unwrap();

        let hits = book.find_by_name("press");
        assert_eq!(hits.len(), 2);

        let hits = book.find_by_name("SQUAT");
        assert_eq!(hits.len(), 1);

        assert!(book.find_by_name("deadlift").is_empty());
    }

    #[test]
    fn test_total_calories() {
        let mut book = ExerciseBook::new();
        assert_eq!(book.total_calories(), 0);

        book.add(exercise("Squat", "150")).unwrap();
        book.add(exercise("Row", "120")).unwrap();
        assert_eq!(book.total_calories(), 270);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut book = ExerciseBook::new();
        book.add(exercise("First", "10")).unwrap();
        book.add(exercise("Second", "20")).unwrap();

        let names: Vec<_> = book.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
