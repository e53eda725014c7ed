use crate::errors::AppResult;
use crate::store::Store;
use crate::store::backend::KvBackend;
use crate::ui::messages::{success, warning};

pub struct FavoriteLogic;

impl FavoriteLogic {
    /// Toggle the favorite flag on each given id.
    pub fn toggle<B: KvBackend>(store: &mut Store<B>, ids: &[i64]) -> AppResult<()> {
        let mut all = store.workouts();
        let mut touched = 0usize;

        for id in ids {
            match all.iter_mut().find(|w| w.id == *id) {
                Some(w) => {
                    w.favorite = !w.favorite;
                    touched += 1;
                    let state = if w.favorite { "starred" } else { "unstarred" };
                    success(format!("{} {} ({}).", state, w.exercise, w.id));
                }
                None => warning(format!("No workout found with id {id}.")),
            }
        }

        if touched > 0 {
            store.save_workouts(&all)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::models::WorkoutType;
    use crate::store::backend::MemoryBackend;

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut store = Store::with_backend(MemoryBackend::default());
        let w = AddLogic::apply(&mut store, "squat", 10, 80.0, WorkoutType::Strength).unwrap();

        FavoriteLogic::toggle(&mut store, &[w.id]).unwrap();
        assert!(store.workouts()[0].favorite);
        FavoriteLogic::toggle(&mut store, &[w.id]).unwrap();
        assert!(!store.workouts()[0].favorite);
    }
}
