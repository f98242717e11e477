//! Habit domain types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Textual timestamp format used for completion events and habit creation
/// dates, both in storage and at the CLI boundary.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How often a habit is meant to be performed.
///
/// Fixed at creation; determines how completion events are folded into
/// periods when computing streaks (calendar day vs ISO calendar week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Daily,
    Weekly,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// Unit name for streak lengths under this periodicity.
    pub fn unit(&self) -> &'static str {
        match self {
            Periodicity::Daily => "days",
            Periodicity::Weekly => "weeks",
        }
    }
}

impl FromStr for Periodicity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(ValidationError::UnsupportedPeriodicity(s.to_string())),
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Row id assigned by the database on creation.
    pub id: i64,
    /// Display name, case-insensitively unique among all habits.
    pub name: String,
    pub periodicity: Periodicity,
    pub created_at: NaiveDateTime,
}
