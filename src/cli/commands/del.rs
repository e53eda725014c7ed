use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, all, yes } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());
        if *all {
            DeleteLogic::clear_all(&mut store, *yes)?;
        } else {
            DeleteLogic::apply(&mut store, ids)?;
        }
    }
    Ok(())
}
