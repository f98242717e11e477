//! SQLite-based habit and completion storage.
//!
//! Stores habits and their completion events. Completion timestamps are
//! kept as `YYYY-MM-DD HH:MM:SS` text and handed to the analytics layer
//! unparsed.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations};
use crate::error::{CoreError, DatabaseError, Result, ValidationError};
use crate::habit::{Habit, Periodicity, TIMESTAMP_FORMAT};

/// SQLite database for habits and completion events.
pub struct HabitDb {
    conn: Connection,
}

impl HabitDb {
    /// Open the database at `~/.config/habitloop/habitloop.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("habitloop.db"))
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new habit and return it with its assigned id.
    ///
    /// # Errors
    /// Returns a validation error if the name is empty or already taken
    /// (names are compared case-insensitively).
    pub fn create_habit(&self, name: &str, periodicity: Periodicity) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let taken: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM habits WHERE lower(name) = lower(?1))",
            params![name],
            |row| row.get(0),
        )?;
        if taken {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        let created_at = Local::now().naive_local();
        self.conn.execute(
            "INSERT INTO habits (name, periodicity, created_at) VALUES (?1, ?2, ?3)",
            params![
                name,
                periodicity.as_str(),
                created_at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;

        Ok(Habit {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            periodicity,
            created_at,
        })
    }

    /// Delete a habit and all its completion events.
    ///
    /// # Errors
    /// Returns a validation error if no habit with this id exists.
    pub fn delete_habit(&self, habit_id: i64) -> Result<()> {
        if self.get_habit(habit_id)?.is_none() {
            return Err(ValidationError::UnknownHabit(habit_id).into());
        }
        // Completions first to keep the FK satisfied.
        self.conn.execute(
            "DELETE FROM completion_dates WHERE habit_id = ?1",
            params![habit_id],
        )?;
        self.conn
            .execute("DELETE FROM habits WHERE id = ?1", params![habit_id])?;
        Ok(())
    }

    /// Fetch a single habit by id, or `None` if it doesn't exist.
    pub fn get_habit(&self, habit_id: i64) -> Result<Option<Habit>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, periodicity, created_at FROM habits WHERE id = ?1",
                params![habit_id],
                habit_row,
            )
            .optional()?;
        row.map(into_habit).transpose()
    }

    /// All habits, ordered by id.
    pub fn list_habits(&self) -> Result<Vec<Habit>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, periodicity, created_at FROM habits ORDER BY id")?;
        let rows = stmt.query_map([], habit_row)?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(into_habit(row?)?);
        }
        Ok(habits)
    }

    /// All habits with the given periodicity, ordered by id.
    pub fn list_habits_by_periodicity(&self, periodicity: Periodicity) -> Result<Vec<Habit>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, periodicity, created_at FROM habits
             WHERE periodicity = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![periodicity.as_str()], habit_row)?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(into_habit(row?)?);
        }
        Ok(habits)
    }

    /// Record a completion event for a habit.
    ///
    /// # Errors
    /// Returns a validation error if the habit doesn't exist or the
    /// completion time lies in the future.
    pub fn add_completion(&self, habit_id: i64, completed_at: NaiveDateTime) -> Result<()> {
        if self.get_habit(habit_id)?.is_none() {
            return Err(ValidationError::UnknownHabit(habit_id).into());
        }
        if completed_at > Local::now().naive_local() {
            return Err(ValidationError::FutureCompletion(completed_at).into());
        }
        self.conn.execute(
            "INSERT INTO completion_dates (habit_id, completion_datetime) VALUES (?1, ?2)",
            params![
                habit_id,
                completed_at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;
        Ok(())
    }

    /// All completion timestamps for a habit, as raw text in insertion
    /// order. This is the input boundary for streak analytics.
    pub fn completion_timestamps(&self, habit_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT completion_datetime FROM completion_dates WHERE habit_id = ?1",
        )?;
        let rows = stmt.query_map(params![habit_id], |row| row.get::<_, String>(0))?;
        let mut timestamps = Vec::new();
        for row in rows {
            timestamps.push(row?);
        }
        Ok(timestamps)
    }

    /// Delete all habits and completion events.
    pub fn delete_all_habits(&self) -> Result<()> {
        self.conn.execute("DELETE FROM completion_dates", [])?;
        self.conn.execute("DELETE FROM habits", [])?;
        Ok(())
    }
}

type HabitRow = (i64, String, String, String);

fn habit_row(row: &rusqlite::Row) -> rusqlite::Result<HabitRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

/// Convert a raw row into a [`Habit`], validating the stored periodicity
/// and timestamp text.
fn into_habit((id, name, periodicity, created_at): HabitRow) -> Result<Habit> {
    let periodicity: Periodicity = periodicity.parse()?;
    let created_at = NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
        .map_err(|_| {
            CoreError::from(ValidationError::InvalidTimestamp { value: created_at })
        })?;
    Ok(Habit {
        id,
        name,
        periodicity,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get_habit() {
        let db = HabitDb::open_memory().unwrap();
        let habit = db.create_habit("Exercise", Periodicity::Daily).unwrap();
        let fetched = db.get_habit(habit.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Exercise");
        assert_eq!(fetched.periodicity, Periodicity::Daily);
    }

    #[test]
    fn empty_name_is_rejected() {
        let db = HabitDb::open_memory().unwrap();
        assert!(matches!(
            db.create_habit("   ", Periodicity::Daily),
            Err(CoreError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let db = HabitDb::open_memory().unwrap();
        db.create_habit("Reading", Periodicity::Daily).unwrap();
        assert!(matches!(
            db.create_habit("reading", Periodicity::Weekly),
            Err(CoreError::Validation(ValidationError::DuplicateName(_)))
        ));
    }

    #[test]
    fn delete_removes_habit_and_completions() {
        let db = HabitDb::open_memory().unwrap();
        let habit = db.create_habit("Exercise", Periodicity::Daily).unwrap();
        let at = NaiveDateTime::parse_from_str("2025-01-05 09:00:00", TIMESTAMP_FORMAT).unwrap();
        db.add_completion(habit.id, at).unwrap();

        db.delete_habit(habit.id).unwrap();
        assert!(db.get_habit(habit.id).unwrap().is_none());
        assert!(db.completion_timestamps(habit.id).unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_habit_is_an_error() {
        let db = HabitDb::open_memory().unwrap();
        assert!(matches!(
            db.delete_habit(42),
            Err(CoreError::Validation(ValidationError::UnknownHabit(42)))
        ));
    }

    #[test]
    fn completion_requires_existing_habit() {
        let db = HabitDb::open_memory().unwrap();
        let at = NaiveDateTime::parse_from_str("2025-01-05 09:00:00", TIMESTAMP_FORMAT).unwrap();
        assert!(matches!(
            db.add_completion(7, at),
            Err(CoreError::Validation(ValidationError::UnknownHabit(7)))
        ));
    }

    #[test]
    fn future_completion_is_rejected() {
        let db = HabitDb::open_memory().unwrap();
        let habit = db.create_habit("Exercise", Periodicity::Daily).unwrap();
        let tomorrow = Local::now().naive_local() + chrono::Duration::days(1);
        assert!(matches!(
            db.add_completion(habit.id, tomorrow),
            Err(CoreError::Validation(ValidationError::FutureCompletion(_)))
        ));
    }

    #[test]
    fn delete_all_clears_habits_and_completions() {
        let db = HabitDb::open_memory().unwrap();
        let habit = db.create_habit("Exercise", Periodicity::Daily).unwrap();
        let at = NaiveDateTime::parse_from_str("2025-01-05 09:00:00", TIMESTAMP_FORMAT).unwrap();
        db.add_completion(habit.id, at).unwrap();

        db.delete_all_habits().unwrap();
        assert!(db.list_habits().unwrap().is_empty());
        assert!(db.completion_timestamps(habit.id).unwrap().is_empty());
    }

    #[test]
    fn list_by_periodicity_filters() {
        let db = HabitDb::open_memory().unwrap();
        db.create_habit("Exercise", Periodicity::Daily).unwrap();
        db.create_habit("Review", Periodicity::Weekly).unwrap();
        db.create_habit("Meditate", Periodicity::Daily).unwrap();

        let daily = db.list_habits_by_periodicity(Periodicity::Daily).unwrap();
        assert_eq!(daily.len(), 2);
        let weekly = db.list_habits_by_periodicity(Periodicity::Weekly).unwrap();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].name, "Review");
    }

    #[test]
    fn timestamps_round_trip_as_text() {
        let db = HabitDb::open_memory().unwrap();
        let habit = db.create_habit("Exercise", Periodicity::Daily).unwrap();
        let at = NaiveDateTime::parse_from_str("2025-01-05 21:15:30", TIMESTAMP_FORMAT).unwrap();
        db.add_completion(habit.id, at).unwrap();
        assert_eq!(
            db.completion_timestamps(habit.id).unwrap(),
            vec!["2025-01-05 21:15:30".to_string()]
        );
    }
}
