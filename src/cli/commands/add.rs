use crate::cli::commands::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::Store;

/// Log a new workout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        exercise,
        reps,
        weight,
        kind,
    } = cmd
    {
        let kind = parse_kind(kind)?;
        let mut store = Store::open(&cfg.data_dir_buf());
        AddLogic::apply(&mut store, exercise, *reps, *weight, kind)?;
    }
    Ok(())
}
