use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::Store;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());
        ImportLogic::apply(&mut store, Path::new(file))?;
    }
    Ok(())
}
