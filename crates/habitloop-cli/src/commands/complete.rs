//! Completion recording command for CLI.

use chrono::NaiveDateTime;
use habitloop_core::{HabitDb, ValidationError, TIMESTAMP_FORMAT};

pub fn run(habit_id: i64, datetime: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Validate the timestamp before touching storage.
    let completed_at = NaiveDateTime::parse_from_str(datetime, TIMESTAMP_FORMAT)
        .map_err(|_| ValidationError::InvalidTimestamp {
            value: datetime.to_string(),
        })?;

    let db = HabitDb::open()?;
    db.add_completion(habit_id, completed_at)?;
    println!("Marked habit {habit_id} as completed at {datetime}.");
    Ok(())
}
