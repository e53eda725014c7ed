use crate::errors::{AppError, AppResult};
use crate::export::import_csv;
use crate::store::Store;
use crate::store::backend::KvBackend;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Merge a CSV file into the store: imported rows are prepended to the
    /// existing collection and everything is saved as one overwrite.
    pub fn apply<B: KvBackend>(store: &mut Store<B>, path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Import(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let (imported, skipped) = import_csv(path)?;

        if skipped > 0 {
            warning(format!("Skipped {skipped} malformed row(s)."));
        }
        if imported.is_empty() {
            warning("No importable rows found.");
            return Ok(());
        }

        let mut merged = imported;
        let count = merged.len();
        merged.extend(store.workouts());
        store.save_workouts(&merged)?;

        success(format!("Imported {count} workout(s)."));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::models::WorkoutType;
    use crate::store::backend::MemoryBackend;
    use std::fs;

    #[test]
    fn import_prepends_to_existing() {
        let mut store = Store::with_backend(MemoryBackend::default());
        AddLogic::apply(&mut store, "existing", 5, 0.0, WorkoutType::Cardio).unwrap();

        let mut path = std::env::temp_dir();
        path.push("rfitlogger_import_prepends.csv");
        fs::write(
            &path,
            "\"Exercise\",\"Reps\",\"Weight\",\"Type\",\"Date\"\n\
             \"imported\",\"8\",\"40\",\"strength\",\"2025-04-01 09:00:00\"\n",
        )
        .unwrap();

        ImportLogic::apply(&mut store, &path).unwrap();
        let all = store.workouts();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].exercise, "imported");
        assert_eq!(all[1].exercise, "existing");
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut store: Store<MemoryBackend> = Store::with_backend(MemoryBackend::default());
        let res = ImportLogic::apply(&mut store, Path::new("/nonexistent/file.csv"));
        assert!(res.is_err());
    }
}
