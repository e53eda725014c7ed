use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::stats::volume_progress;
use crate::store::Store;
use crate::ui::messages::{progress_bar, success};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { set } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());

        if let Some(value) = set {
            store.set_weekly_goal(*value)?;
            success(format!("Weekly volume goal set to {value} {}·reps.", cfg.weight_unit));
            return Ok(());
        }

        let progress = volume_progress(&store.workouts(), store.weekly_goal(), Local::now());
        println!(
            "{} {} / {} {}·reps ({}%)",
            progress_bar(progress.percent),
            progress.current,
            progress.goal,
            cfg.weight_unit,
            progress.percent
        );
    }
    Ok(())
}
