use clap::{Parser, Subcommand};
use replog_core::{
    book_to_csv, load_book, save_book, Calories, Config, Description, Error, Exercise,
    ExerciseDate, Muscle, Name, Result,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "replog")]
#[command(about = "Personal exercise log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new exercise
    Add {
        /// Exercise name
        #[arg(long)]
        name: String,

        /// What was done
        #[arg(long)]
        description: String,

        /// Date performed (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Calories burned
        #[arg(long, allow_hyphen_values = true)]
        calories: String,

        /// Comma-separated muscles worked, e.g. "biceps,lats"
        #[arg(long, default_value = "")]
        muscles: String,
    },

    /// List every logged exercise (default)
    List,

    /// Search exercises by name
    Find {
        /// Case-insensitive name fragment
        keyword: String,
    },

    /// Delete an exercise by its list position
    Delete {
        /// Position as shown by `list` (starts at 1)
        index: usize,
    },

    /// Export the log to CSV
    Export {
        /// Output path (defaults to exercises.csv in the data directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        replog_core::logging::init_with_level("debug");
    } else {
        replog_core::logging::init();
    }

    // Determine data directory
    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    let book_path = config.book_path();
    tracing::debug!("Using book at {:?}", book_path);

    match cli.command {
        Some(Commands::Add {
            name,
            description,
            date,
            calories,
            muscles,
        }) => cmd_add(&book_path, name, description, date, calories, muscles),
        Some(Commands::Find { keyword }) => cmd_find(&book_path, &keyword),
        Some(Commands::Delete { index }) => cmd_delete(&book_path, index),
        Some(Commands::Export { out }) => {
            let out = out.unwrap_or_else(|| config.data.data_dir.join("exercises.csv"));
            cmd_export(&book_path, &out)
        }
        Some(Commands::List) | None => cmd_list(&book_path),
    }
}

fn cmd_add(
    book_path: &Path,
    name: String,
    description: String,
    date: String,
    calories: String,
    muscles: String,
) -> Result<()> {
    // Value objects validate here, so bad input fails before the book is
    // touched.
    let exercise = Exercise {
        name: Name::new(name)?,
        description: Description::new(description)?,
        date: ExerciseDate::new(&date)?,
        calories: Calories::new(&calories)?,
        muscles_worked: Muscle::parse_list(&muscles)?,
    };

    let mut book = load_book(book_path)?;
    book.add(exercise.clone())?;
    save_book(&book, book_path)?;

    println!(
        "✓ Logged {} ({} kcal) on {}",
        exercise.name, exercise.calories, exercise.date
    );
    Ok(())
}

fn cmd_list(book_path: &Path) -> Result<()> {
    let book = load_book(book_path)?;

    if book.is_empty() {
        println!("No exercises logged yet.");
        return Ok(());
    }

    for (i, exercise) in book.iter().enumerate() {
        print_exercise(i + 1, exercise);
    }
    println!();
    println!("Total calories: {}", book.total_calories());
    Ok(())
}

fn cmd_find(book_path: &Path, keyword: &str) -> Result<()> {
    let book = load_book(book_path)?;
    let matches = book.find_by_name(keyword);

    if matches.is_empty() {
        println!("No exercises matching \"{keyword}\".");
        return Ok(());
    }

    for (i, exercise) in matches.into_iter().enumerate() {
        print_exercise(i + 1, exercise);
    }
    Ok(())
}

fn cmd_delete(book_path: &Path, index: usize) -> Result<()> {
    let mut book = load_book(book_path)?;

    // The CLI surface is 1-based; the book is 0-based.
    if index == 0 || index > book.len() {
        return Err(Error::InvalidIndex {
            index,
            len: book.len(),
        });
    }
    let removed = book.remove(index - 1)?;
    save_book(&book, book_path)?;

    println!("✓ Removed {} ({})", removed.name, removed.date);
    Ok(())
}

fn cmd_export(book_path: &Path, out: &Path) -> Result<()> {
    let book = load_book(book_path)?;
    let count = book_to_csv(&book, out)?;

    println!("✓ Exported {} exercises to CSV", count);
    println!("  CSV: {}", out.display());
    Ok(())
}

fn print_exercise(position: usize, exercise: &Exercise) {
    println!(
        "{:>3}. {}  [{}]  {} kcal",
        position, exercise.name, exercise.date, exercise.calories
    );
    println!("     {}", exercise.description);
    if !exercise.muscles_worked.is_empty() {
        println!("     muscles: {}", exercise.muscles_description());
    }
}
