use crate::config::Config;
use crate::errors::AppResult;

/// Create the configuration file and the data directory.
pub fn handle() -> AppResult<()> {
    Config::init_all()
}
