use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;
use crate::models::workout::parse_timestamp;
use crate::store::Store;
use crate::store::backend::KvBackend;
use crate::ui::messages::success;

/// Field-wise changes for an existing record. `None` leaves a field alone.
#[derive(Debug, Default)]
pub struct EditFields {
    pub exercise: Option<String>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub kind: Option<WorkoutType>,
    /// Explicit `createdAt` override; the only way the stamp ever changes.
    pub date: Option<String>,
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply<B: KvBackend>(
        store: &mut Store<B>,
        id: i64,
        fields: EditFields,
    ) -> AppResult<()> {
        let created_at = match &fields.date {
            Some(raw) => Some(
                parse_timestamp(raw)
                    .ok_or_else(|| AppError::InvalidDate(raw.clone()))?
                    .to_rfc3339(),
            ),
            None => None,
        };

        let mut all = store.workouts();
        let record = all
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(AppError::WorkoutNotFound(id))?;

        if let Some(exercise) = fields.exercise {
            if exercise.trim().is_empty() {
                return Err(AppError::InvalidValue(
                    "exercise name must not be empty".to_string(),
                ));
            }
            record.exercise = exercise.trim().to_string();
        }
        if let Some(reps) = fields.reps {
            record.reps = reps;
        }
        if let Some(weight) = fields.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::InvalidValue(format!(
                    "weight must be a non-negative number, got '{weight}'"
                )));
            }
            record.weight = weight;
        }
        if let Some(kind) = fields.kind {
            record.kind = kind;
        }
        if let Some(stamp) = created_at {
            record.created_at = stamp;
        }

        store.save_workouts(&all)?;
        success(format!("Workout {id} updated."));
        Ok(())
    }
}
