//! Seed-file loading command for CLI.

use std::path::Path;

use habitloop_core::storage::load_seed_file;
use habitloop_core::HabitDb;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let db = HabitDb::open()?;
    let summary = load_seed_file(&db, path)?;
    println!(
        "Loaded {} habits and {} completions from {}.",
        summary.habits,
        summary.completions,
        path.display()
    );
    Ok(())
}
