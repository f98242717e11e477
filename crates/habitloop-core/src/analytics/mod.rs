//! Analytics over stored habits.
//!
//! The [`Analytics`] facade fetches completion timestamps from storage and
//! delegates to the pure [`calculate_streak`] function; streaks are always
//! recomputed from the current completion set, never cached.

mod streak;

pub use streak::calculate_streak;

use crate::error::Result;
use crate::storage::HabitDb;

/// Streak analytics bound to an explicit database handle.
pub struct Analytics<'a> {
    db: &'a HabitDb,
}

impl<'a> Analytics<'a> {
    pub fn new(db: &'a HabitDb) -> Self {
        Self { db }
    }

    /// Longest streak for one habit, in the unit of its periodicity.
    ///
    /// An unknown habit id yields 0 rather than an error: no habit means
    /// no data, which is distinct from malformed input.
    ///
    /// # Errors
    /// Returns an error if storage fails or a stored timestamp is malformed.
    pub fn longest_streak_for_habit(&self, habit_id: i64) -> Result<u32> {
        let Some(habit) = self.db.get_habit(habit_id)? else {
            return Ok(0);
        };
        let timestamps = self.db.completion_timestamps(habit_id)?;
        Ok(calculate_streak(&timestamps, habit.periodicity)?)
    }

    /// Longest streak across all habits, each computed under its own
    /// periodicity. Zero habits yields 0.
    ///
    /// # Errors
    /// Returns an error if storage fails or a stored timestamp is malformed.
    pub fn longest_streak_overall(&self) -> Result<u32> {
        let mut longest = 0;
        for habit in self.db.list_habits()? {
            let timestamps = self.db.completion_timestamps(habit.id)?;
            let streak = calculate_streak(&timestamps, habit.periodicity)?;
            longest = longest.max(streak);
        }
        Ok(longest)
    }
}
