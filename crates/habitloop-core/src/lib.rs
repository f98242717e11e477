//! # Habitloop Core Library
//!
//! Core business logic for the Habitloop habit tracker. All operations are
//! available via a standalone CLI binary built on top of this library.
//!
//! ## Architecture
//!
//! - **Storage**: SQLite-based habit and completion-event persistence
//! - **Analytics**: streak computation over completion timestamps, always
//!   recomputed from the stored events
//!
//! ## Key Components
//!
//! - [`HabitDb`]: habit and completion persistence
//! - [`calculate_streak`]: pure longest-streak computation
//! - [`Analytics`]: storage-backed streak queries

pub mod analytics;
pub mod error;
pub mod habit;
pub mod storage;

pub use analytics::{calculate_streak, Analytics};
pub use error::{CoreError, DatabaseError, Result, ValidationError};
pub use habit::{Habit, Periodicity, TIMESTAMP_FORMAT};
pub use storage::HabitDb;
