use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::favorite::FavoriteLogic;
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Favorite { ids } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());
        FavoriteLogic::toggle(&mut store, ids)?;
    }
    Ok(())
}
