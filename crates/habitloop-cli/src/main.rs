use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitloop", version, about = "Habitloop CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Mark a habit as completed at a given time
    Complete {
        /// Habit ID
        habit_id: i64,
        /// Completion time (YYYY-MM-DD HH:MM:SS)
        datetime: String,
    },
    /// Streak analytics
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Load habits and completions from a JSON seed file
    Seed {
        /// Path to the seed file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Complete { habit_id, datetime } => commands::complete::run(habit_id, &datetime),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Seed { path } => commands::seed::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
