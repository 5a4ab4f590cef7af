pub mod analyze;
pub mod health;
pub mod mood_log;
