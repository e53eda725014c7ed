// src/export/mod.rs

mod csv_file;
mod fs_utils;
mod json_file;

pub use csv_file::{export_csv, import_csv};
pub use fs_utils::ensure_writable;
pub use json_file::export_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
