use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::workout::parse_timestamp;
use crate::models::{Workout, WorkoutType};
use crate::ui::messages::info;
use crate::utils::num::{parse_float_or_default, parse_int_or_default};
use chrono::Local;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Fixed column order of the interchange format.
const HEADER: [&str; 5] = ["Exercise", "Reps", "Weight", "Type", "Date"];

/// Date rendering used in exported rows; one of the formats accepted back
/// on import.
const DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the full collection as CSV. Every field is quoted, matching the
/// historical export format.
pub fn export_csv(records: &[Workout], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(HEADER)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for w in records {
        let date = match w.created_local() {
            Some(dt) => dt.format(DATE_FMT).to_string(),
            // Unparseable stamps are exported raw; import will skip them.
            None => w.created_at.clone(),
        };
        wtr.write_record([
            w.exercise.as_str(),
            &w.reps.to_string(),
            &w.weight.to_string(),
            w.kind.wt_as_str(),
            &date,
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

/// Parse a CSV file into fresh workout records.
///
/// The header row is skipped. Rows with an empty exercise, empty reps
/// field, empty type, or an unparseable date are silently dropped; the
/// second element of the result counts them. Numeric fields are coerced
/// with the lenient policy. Every accepted row gets a new unique id and
/// `favorite = false`.
pub fn import_csv(path: &Path) -> AppResult<(Vec<Workout>, usize)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("cannot read '{}': {e}", path.display())))?;

    let base_id = Local::now().timestamp_millis();
    let mut imported = Vec::new();
    let mut skipped = 0usize;

    for (idx, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let field = |i: usize| row.get(i).unwrap_or("").trim().to_string();
        let (exercise, reps_raw, weight_raw, kind_raw) =
            (field(0), field(1), field(2), field(3));
        let date = parse_timestamp(&field(4));

        let Some(date) = date else {
            skipped += 1;
            continue;
        };
        if exercise.is_empty() || reps_raw.is_empty() || kind_raw.is_empty() {
            skipped += 1;
            continue;
        }

        imported.push(Workout {
            id: base_id + idx as i64,
            exercise,
            reps: parse_int_or_default(&reps_raw),
            weight: parse_float_or_default(&weight_raw),
            kind: WorkoutType::from(kind_raw),
            created_at: date.to_rfc3339(),
            favorite: false,
        });
    }

    Ok((imported, skipped))
}
