use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json};
use crate::store::Store;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = Store::open(&cfg.data_dir_buf());
        let records = store.workouts();

        if records.is_empty() {
            warning("No workouts to export.");
            return Ok(());
        }

        let path = Path::new(file);
        ensure_writable(path, *force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }
    }
    Ok(())
}
