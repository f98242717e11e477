//! Bulk-loading of seed habits from a JSON file.
//!
//! The file holds an array of habits, each with a name, a periodicity and
//! an optional list of completion timestamps:
//!
//! ```json
//! [
//!   {
//!     "name": "Exercise",
//!     "periodicity": "daily",
//!     "completions": ["2025-01-05 09:00:00", "2025-01-06 08:45:00"]
//!   }
//! ]
//! ```

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::HabitDb;
use crate::error::{Result, ValidationError};
use crate::habit::{Periodicity, TIMESTAMP_FORMAT};

/// One habit entry in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedHabit {
    pub name: String,
    pub periodicity: Periodicity,
    #[serde(default)]
    pub completions: Vec<String>,
}

/// Counts of what a seed load inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSummary {
    pub habits: usize,
    pub completions: usize,
}

/// Load a seed file and insert its habits and completion events.
///
/// Entries are validated like interactive input: duplicate names, unknown
/// periodicities and malformed timestamps all fail the load.
///
/// # Errors
/// Returns an error on IO failure, malformed JSON, or any entry that fails
/// validation.
pub fn load_seed_file(db: &HabitDb, path: &Path) -> Result<SeedSummary> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<SeedHabit> = serde_json::from_str(&text)?;

    let mut summary = SeedSummary::default();
    for entry in entries {
        let habit = db.create_habit(&entry.name, entry.periodicity)?;
        summary.habits += 1;
        for raw in &entry.completions {
            let at = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
                .map_err(|_| ValidationError::InvalidTimestamp { value: raw.clone() })?;
            db.add_completion(habit.id, at)?;
            summary.completions += 1;
        }
    }
    Ok(summary)
}
