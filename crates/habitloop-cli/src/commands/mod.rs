pub mod complete;
pub mod habit;
pub mod seed;
pub mod streak;
