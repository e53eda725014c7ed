use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Profile;
use crate::store::Store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { name } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());

        if let Some(display_name) = name {
            store.set_profile(&Profile {
                display_name: display_name.trim().to_string(),
            })?;
            success("Profile saved.");
            return Ok(());
        }

        let profile = store.profile();
        if profile.display_name.is_empty() {
            println!("Display name: (not set)");
        } else {
            println!("Display name: {}", profile.display_name);
        }
    }
    Ok(())
}
