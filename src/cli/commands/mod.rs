pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod favorite;
pub mod feedback;
pub mod goal;
pub mod import;
pub mod init;
pub mod list;
pub mod profile;
pub mod stats;
pub mod trend;

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;

/// Parse a CLI workout-type argument, with a helpful error.
pub(crate) fn parse_kind(raw: &str) -> AppResult<WorkoutType> {
    WorkoutType::wt_from_str(raw).ok_or_else(|| {
        AppError::InvalidWorkoutType(format!(
            "'{raw}'. Use one of: strength, cardio, stretch"
        ))
    })
}
