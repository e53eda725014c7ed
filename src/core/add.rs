use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutType};
use crate::store::Store;
use crate::store::backend::KvBackend;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Prepend a fresh record and persist the whole collection.
    pub fn apply<B: KvBackend>(
        store: &mut Store<B>,
        exercise: &str,
        reps: u32,
        weight: f64,
        kind: WorkoutType,
    ) -> AppResult<Workout> {
        if exercise.trim().is_empty() {
            return Err(AppError::InvalidValue(
                "exercise name must not be empty".to_string(),
            ));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::InvalidValue(format!(
                "weight must be a non-negative number, got '{weight}'"
            )));
        }

        let record = Workout::new(exercise, reps, weight, kind);

        let mut all = store.workouts();
        all.insert(0, record.clone());
        store.save_workouts(&all)?;

        success(format!(
            "Added {} — {} reps{} [{}].",
            record.exercise,
            record.reps,
            if record.weight > 0.0 {
                format!(" @ {}kg", record.weight)
            } else {
                String::new()
            },
            record.kind,
        ));

        Ok(record)
    }
}
