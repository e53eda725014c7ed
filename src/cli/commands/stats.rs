use crate::config::Config;
use crate::errors::AppResult;
use crate::stats::{daily_stats, volume_progress, weekly_stats};
use crate::store::Store;
use crate::ui::messages::{header, progress_bar};
use chrono::Local;

/// The dashboard view: today's session, weekly summary, goal progress.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(&cfg.data_dir_buf());
    let records = store.workouts();
    let goal = store.weekly_goal();
    let now = Local::now();

    let today = daily_stats(&records, now);
    let week = weekly_stats(&records, now);
    let progress = volume_progress(&records, goal, now);
    let unit = &cfg.weight_unit;

    header("Today's Session");
    println!("Total reps:     {}", today.total_reps);
    println!("Exercise types: {}", today.type_count);
    println!("Session time:   {}", today.session_time);

    println!();
    header("Weekly Summary");
    println!("Total reps:     {}", week.total_reps);
    println!("Total weight:   {:.1} {unit}", week.total_weight);
    println!("Sessions:       {}", week.session_count);
    println!("Daily sessions: {}", week.daily_sessions);
    println!("Most frequent:  {}", week.most_frequent);

    println!();
    header("Weekly Volume Goal");
    println!(
        "{} {} / {} {unit}·reps ({}%)",
        progress_bar(progress.percent),
        progress.current,
        progress.goal,
        progress.percent
    );

    Ok(())
}
