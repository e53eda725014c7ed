use crate::config::Config;
use crate::errors::AppResult;
use crate::stats::volume_trend;
use crate::store::Store;
use crate::ui::messages::header;
use chrono::Local;

const BAR_WIDTH: f64 = 40.0;

/// Volume over the last four calendar weeks, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(&cfg.data_dir_buf());
    let records = store.workouts();
    let goal = store.weekly_goal();

    let trend = volume_trend(&records, Local::now(), cfg.week_start);
    let max = trend.volumes.iter().cloned().fold(0.0_f64, f64::max);
    let unit = &cfg.weight_unit;

    header("Volume Over Last 4 Weeks");
    for (label, volume) in trend.labels.iter().zip(&trend.volumes) {
        let len = if max > 0.0 {
            (volume / max * BAR_WIDTH).ceil() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat_n('#', len).collect();
        println!("{label:<7} {bar} {volume} {unit}·reps");
    }
    if goal > 0 {
        println!("Goal: {goal} {unit}·reps/week");
    }

    Ok(())
}
