use crate::models::{Workout, WorkoutType};
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SortOrder {
    /// Most recent first (by id, which is the creation stamp).
    #[default]
    Newest,
    Oldest,
    /// Highest rep count first.
    Reps,
    /// Alphabetical by exercise.
    Name,
}

/// Search/filter criteria of the history view. All empty = everything.
#[derive(Debug, Default)]
pub struct WorkoutFilter {
    /// Case-insensitive substring match on the exercise name.
    pub search: Option<String>,
    pub kind: Option<WorkoutType>,
    pub from: Option<NaiveDate>,
    /// Inclusive: extends to the end of the given day.
    pub to: Option<NaiveDate>,
    pub favorites_only: bool,
}

impl WorkoutFilter {
    fn matches(&self, w: &Workout) -> bool {
        if let Some(q) = &self.search
            && !w.exercise.to_lowercase().contains(&q.to_lowercase())
        {
            return false;
        }
        if let Some(kind) = &self.kind
            && w.kind != *kind
        {
            return false;
        }
        if self.favorites_only && !w.favorite {
            return false;
        }
        if self.from.is_some() || self.to.is_some() {
            let Some(d) = w.created_date() else {
                return false;
            };
            if self.from.is_some_and(|from| d < from) {
                return false;
            }
            if self.to.is_some_and(|to| d > to) {
                return false;
            }
        }
        true
    }

    /// Filter and sort a copy of the collection for display.
    pub fn apply(&self, records: &[Workout], order: SortOrder) -> Vec<Workout> {
        let mut out: Vec<Workout> = records.iter().filter(|w| self.matches(w)).cloned().collect();
        match order {
            SortOrder::Newest => out.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Oldest => out.sort_by(|a, b| a.id.cmp(&b.id)),
            SortOrder::Reps => out.sort_by(|a, b| b.reps.cmp(&a.reps)),
            SortOrder::Name => {
                out.sort_by(|a, b| a.exercise.to_lowercase().cmp(&b.exercise.to_lowercase()))
            }
        }
        out
    }
}
