//! Streak analytics commands for CLI.

use clap::Subcommand;
use habitloop_core::{Analytics, HabitDb};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Longest streak for one habit
    Habit {
        /// Habit ID
        id: i64,
    },
    /// Longest streak across all habits
    Overall,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = HabitDb::open()?;
    let analytics = Analytics::new(&db);

    match action {
        StreakAction::Habit { id } => match db.get_habit(id)? {
            Some(habit) => {
                let streak = analytics.longest_streak_for_habit(id)?;
                println!(
                    "The longest streak for '{}' is {} {}.",
                    habit.name,
                    streak,
                    habit.periodicity.unit()
                );
            }
            None => println!("No habit found with ID {id}."),
        },
        StreakAction::Overall => {
            let streak = analytics.longest_streak_overall()?;
            println!("The longest streak across all habits is {streak}.");
        }
    }
    Ok(())
}
