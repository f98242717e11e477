//! Habit management commands for CLI.

use clap::Subcommand;
use habitloop_core::{HabitDb, Periodicity};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Create {
        /// Habit name
        name: String,
        /// Periodicity: daily or weekly
        periodicity: String,
    },
    /// Delete a habit by its ID
    Delete {
        /// Habit ID
        id: i64,
    },
    /// List habits
    List {
        /// Filter by periodicity (daily or weekly)
        #[arg(long)]
        periodicity: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = HabitDb::open()?;

    match action {
        HabitAction::Create { name, periodicity } => {
            let periodicity: Periodicity = periodicity.parse()?;
            let habit = db.create_habit(&name, periodicity)?;
            println!("Created habit: {} ({})", habit.name, habit.periodicity);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { id } => {
            db.delete_habit(id)?;
            println!("Deleted habit with ID: {id}");
        }
        HabitAction::List { periodicity } => {
            let habits = match periodicity {
                Some(p) => db.list_habits_by_periodicity(p.parse()?)?,
                None => db.list_habits()?,
            };
            if habits.is_empty() {
                println!("No habits found.");
            } else {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            }
        }
    }
    Ok(())
}
