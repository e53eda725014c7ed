use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feedback { message, list } = cmd {
        let mut store = Store::open(&cfg.data_dir_buf());

        if *list {
            let entries = store.feedback();
            if entries.is_empty() {
                warning("No feedback recorded yet.");
                return Ok(());
            }
            for entry in entries {
                println!("[{}] {} — {}", entry.id, entry.created_at, entry.message);
            }
            return Ok(());
        }

        let message = message
            .as_deref()
            .ok_or_else(|| AppError::InvalidValue("feedback message is required".to_string()))?;
        if message.trim().is_empty() {
            return Err(AppError::InvalidValue(
                "feedback message must not be empty".to_string(),
            ));
        }

        store.add_feedback(message)?;
        success("Thank you for your feedback!");
    }
    Ok(())
}
