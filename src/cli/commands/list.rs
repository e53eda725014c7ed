use crate::cli::commands::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{SortOrder, WorkoutFilter};
use crate::errors::{AppError, AppResult};
use crate::models::Workout;
use crate::stats::reps_per_day;
use crate::store::Store;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        kind,
        sort,
        from,
        to,
        favorites,
        chart,
    } = cmd
    {
        let filter = WorkoutFilter {
            search: search.clone(),
            kind: kind.as_deref().map(parse_kind).transpose()?,
            from: parse_bound(from.as_deref())?,
            to: parse_bound(to.as_deref())?,
            favorites_only: *favorites,
        };

        let store = Store::open(&cfg.data_dir_buf());
        let records = filter.apply(&store.workouts(), *sort);

        if records.is_empty() {
            println!("No workouts found.");
            return Ok(());
        }

        if *chart {
            print_chart(&records);
        } else {
            print_rows(&records, &cfg.weight_unit);
        }
    }
    Ok(())
}

fn parse_bound(raw: Option<&str>) -> AppResult<Option<chrono::NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

fn print_rows(records: &[Workout], unit: &str) {
    for w in records {
        let star = if w.favorite { "⭐" } else { "☆" };
        let weight = if w.weight > 0.0 {
            format!(" @ {}{unit}", w.weight)
        } else {
            String::new()
        };
        let when = w
            .created_local()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| w.created_at.clone());
        println!(
            "{} [{}] {} — {} reps{} ({}) {}",
            star, w.id, w.exercise, w.reps, weight, w.kind, when
        );
    }
}

/// Reps-per-day text chart, one bar per calendar day.
fn print_chart(records: &[Workout]) {
    const WIDTH: u32 = 40;
    let days = reps_per_day(records);
    let max = days.iter().map(|(_, reps)| *reps).max().unwrap_or(0);
    if max == 0 {
        println!("No reps to chart.");
        return;
    }

    for (day, reps) in days {
        let len = (reps * WIDTH).div_ceil(max);
        let bar: String = std::iter::repeat_n('#', len as usize).collect();
        println!("{day}  {bar} {reps}");
    }
}
