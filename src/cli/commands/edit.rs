use crate::cli::commands::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditFields, EditLogic};
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        exercise,
        reps,
        weight,
        kind,
        date,
    } = cmd
    {
        let fields = EditFields {
            exercise: exercise.clone(),
            reps: *reps,
            weight: *weight,
            kind: kind.as_deref().map(parse_kind).transpose()?,
            date: date.clone(),
        };

        let mut store = Store::open(&cfg.data_dir_buf());
        EditLogic::apply(&mut store, *id, fields)?;
    }
    Ok(())
}
