use super::EMPTY_SENTINEL;
use crate::models::Workout;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Aggregates over the records logged on `now`'s calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStats {
    pub total_reps: u32,
    /// Number of distinct workout types trained today.
    pub type_count: usize,
    /// "HH:MM:SS - HH:MM:SS" across the earliest and latest record, or "-".
    pub session_time: String,
}

pub fn daily_stats(records: &[Workout], now: DateTime<Local>) -> DailyStats {
    let today = now.date_naive();
    let todays: Vec<(&Workout, DateTime<Local>)> = records
        .iter()
        .filter_map(|w| w.created_local().map(|dt| (w, dt)))
        .filter(|(_, dt)| dt.date_naive() == today)
        .collect();

    let total_reps = todays.iter().map(|(w, _)| w.reps).sum();
    let type_count = todays
        .iter()
        .map(|(w, _)| &w.kind)
        .collect::<HashSet<_>>()
        .len();

    let session_time = match (
        todays.iter().map(|(_, dt)| *dt).min(),
        todays.iter().map(|(_, dt)| *dt).max(),
    ) {
        (Some(first), Some(last)) => {
            format!("{} - {}", first.format("%H:%M:%S"), last.format("%H:%M:%S"))
        }
        _ => EMPTY_SENTINEL.to_string(),
    };

    DailyStats {
        total_reps,
        type_count,
        session_time,
    }
}

/// Reps summed per calendar day, ascending by date. Drives the text chart
/// of the `list --chart` view.
pub fn reps_per_day(records: &[Workout]) -> Vec<(NaiveDate, u32)> {
    let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for w in records {
        if let Some(d) = w.created_date() {
            *by_day.entry(d).or_insert(0) += w.reps;
        }
    }
    by_day.into_iter().collect()
}
