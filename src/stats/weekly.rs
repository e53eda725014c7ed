use super::EMPTY_SENTINEL;
use crate::models::Workout;
use chrono::{DateTime, Duration, Local};
use std::collections::HashSet;

/// Aggregates over the trailing 7-day window.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyStats {
    pub total_reps: u32,
    pub total_weight: f64,
    pub session_count: usize,
    /// Distinct calendar days with at least one record.
    pub daily_sessions: usize,
    /// Most logged exercise; ties go to the first one encountered.
    pub most_frequent: String,
}

/// Progress against the weekly volume goal, in kg·reps.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeProgress {
    pub current: f64,
    pub goal: i64,
    /// Always within [0, 100]; 0 whenever the goal is unset or non-positive.
    pub percent: u32,
}

/// Records with `created_at` strictly inside the last 7 days.
/// A record exactly 7 days old falls outside the window.
fn last_seven_days(records: &[Workout], now: DateTime<Local>) -> Vec<&Workout> {
    let cutoff = now - Duration::days(7);
    records
        .iter()
        .filter(|w| w.created_local().is_some_and(|dt| dt > cutoff))
        .collect()
}

pub fn weekly_stats(records: &[Workout], now: DateTime<Local>) -> WeeklyStats {
    let in_range = last_seven_days(records, now);

    let total_reps = in_range.iter().map(|w| w.reps).sum();
    let total_weight = in_range.iter().map(|w| w.weight).sum();
    let session_count = in_range.len();
    let daily_sessions = in_range
        .iter()
        .filter_map(|w| w.created_date())
        .collect::<HashSet<_>>()
        .len();

    WeeklyStats {
        total_reps,
        total_weight,
        session_count,
        daily_sessions,
        most_frequent: most_frequent_exercise(&in_range),
    }
}

pub fn volume_progress(records: &[Workout], goal: i64, now: DateTime<Local>) -> VolumeProgress {
    let current: f64 = last_seven_days(records, now)
        .iter()
        .map(|w| w.volume())
        .sum();

    let percent = if goal > 0 {
        let pct = (current / goal as f64 * 100.0).round();
        (pct as u32).min(100)
    } else {
        0
    };

    VolumeProgress {
        current,
        goal,
        percent,
    }
}

fn most_frequent_exercise(in_range: &[&Workout]) -> String {
    // Counted into an insertion-ordered list so ties resolve to the
    // exercise seen first.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for w in in_range {
        match counts.iter_mut().find(|(name, _)| *name == w.exercise) {
            Some((_, n)) => *n += 1,
            None => counts.push((w.exercise.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, n) in counts {
        if best.is_none_or(|(_, bn)| n > bn) {
            best = Some((name, n));
        }
    }
    best.map_or_else(|| EMPTY_SENTINEL.to_string(), |(name, _)| name.to_string())
}
