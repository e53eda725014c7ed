use crate::models::Workout;
use crate::utils::date::{WeekStart, month_day_label, week_bounds};
use chrono::{DateTime, Local};

/// Volume per calendar week over the last four weeks, oldest first.
/// Labels and volumes are parallel; both always hold exactly four entries.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeTrend {
    pub labels: Vec<String>,
    pub volumes: Vec<f64>,
}

pub fn volume_trend(records: &[Workout], now: DateTime<Local>, week_start: WeekStart) -> VolumeTrend {
    let today = now.date_naive();
    let mut labels = Vec::with_capacity(4);
    let mut volumes = Vec::with_capacity(4);

    // Stamps are compared in naive local time; the bucket bounds are
    // inclusive on both ends (first day 00:00:00.000 .. last day 23:59:59.999).
    for weeks_ago in (0..4).rev() {
        let (start, end) = week_bounds(today, weeks_ago, week_start);
        let volume = records
            .iter()
            .filter(|w| {
                w.created_local()
                    .map(|dt| dt.naive_local())
                    .is_some_and(|dt| dt >= start && dt <= end)
            })
            .map(|w| w.volume())
            .sum();

        labels.push(month_day_label(start.date()));
        volumes.push(volume);
    }

    VolumeTrend { labels, volumes }
}
