//! Statistics engine: pure transformations from a flat workout list to
//! display-ready aggregates. Nothing here touches the store; every function
//! takes the records and an explicit `now` so results are deterministic
//! under test.
//!
//! All aggregates are recomputed from the full list on every call. Personal
//! workout logs are small, and full recomputation removes any chance of
//! incremental-consistency bugs.

pub mod daily;
pub mod trend;
pub mod weekly;

pub use daily::{DailyStats, daily_stats, reps_per_day};
pub use trend::{VolumeTrend, volume_trend};
pub use weekly::{VolumeProgress, WeeklyStats, volume_progress, weekly_stats};

/// Sentinel shown when a range holds no data ("no session", "no exercise").
pub const EMPTY_SENTINEL: &str = "-";
