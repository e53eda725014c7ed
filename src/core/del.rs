use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::store::backend::KvBackend;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the given ids. Unknown ids are reported, never fatal.
    pub fn apply<B: KvBackend>(store: &mut Store<B>, ids: &[i64]) -> AppResult<()> {
        let all = store.workouts();
        let (kept, removed): (Vec<_>, Vec<_>) =
            all.into_iter().partition(|w| !ids.contains(&w.id));

        for id in ids {
            if !removed.iter().any(|w| w.id == *id) {
                warning(format!("No workout found with id {id}."));
            }
        }

        if removed.is_empty() {
            return Ok(());
        }

        store.save_workouts(&kept)?;
        success(format!("Deleted {} workout(s).", removed.len()));
        Ok(())
    }

    /// Clear the whole collection. Asks for confirmation unless `yes`.
    pub fn clear_all<B: KvBackend>(store: &mut Store<B>, yes: bool) -> AppResult<()> {
        let count = store.workouts().len();
        if count == 0 {
            warning("No workouts to clear.");
            return Ok(());
        }

        if !yes && !confirm(&format!("Delete all {count} workouts? [y/N]: "))? {
            warning("Clear cancelled.");
            return Ok(());
        }

        store.save_workouts(&[])?;
        success(format!("Cleared {count} workout(s)."));
        Ok(())
    }
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::models::WorkoutType;
    use crate::store::backend::MemoryBackend;

    #[test]
    fn delete_by_id_and_bulk() {
        let mut store = Store::with_backend(MemoryBackend::default());
        let a = AddLogic::apply(&mut store, "a", 1, 0.0, WorkoutType::Cardio).unwrap();
        let b = AddLogic::apply(&mut store, "b", 2, 0.0, WorkoutType::Cardio).unwrap();
        let c = AddLogic::apply(&mut store, "c", 3, 0.0, WorkoutType::Cardio).unwrap();

        DeleteLogic::apply(&mut store, &[a.id, c.id]).unwrap();
        let left = store.workouts();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);

        // unknown id is a warning, not an error
        DeleteLogic::apply(&mut store, &[9999]).unwrap();
        assert_eq!(store.workouts().len(), 1);
    }

    #[test]
    fn clear_all_with_yes() {
        let mut store = Store::with_backend(MemoryBackend::default());
        AddLogic::apply(&mut store, "a", 1, 0.0, WorkoutType::Cardio).unwrap();
        DeleteLogic::clear_all(&mut store, true).unwrap();
        assert!(store.workouts().is_empty());
    }
}
