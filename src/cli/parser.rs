use crate::core::filter::SortOrder;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFitLogger
/// CLI application to log workouts and track weekly training volume
#[derive(Parser)]
#[command(
    name = "rfitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple workout logging CLI: track exercises, weekly volume and goal progress",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a custom store)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log a workout
    Add {
        /// Exercise name
        exercise: String,

        /// Repetition count
        #[arg(long, help = "Number of repetitions")]
        reps: u32,

        /// Weight in kg (0 for bodyweight/cardio work)
        #[arg(long, default_value_t = 0.0, help = "Weight in kg")]
        weight: f64,

        /// Workout type: strength, cardio or stretch
        #[arg(long = "type", help = "Workout type: strength, cardio or stretch")]
        kind: String,
    },

    /// Show the workout history
    List {
        #[arg(long, help = "Case-insensitive substring match on the exercise name")]
        search: Option<String>,

        #[arg(long = "type", help = "Filter by workout type")]
        kind: Option<String>,

        #[arg(long, value_enum, default_value = "newest", help = "Sort order")]
        sort: SortOrder,

        #[arg(long, value_name = "DATE", help = "Only records on or after this date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", help = "Only records on or before this date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Only starred workouts")]
        favorites: bool,

        #[arg(long, help = "Render a reps-per-day chart instead of rows")]
        chart: bool,
    },

    /// Edit an existing workout
    Edit {
        /// Workout id (shown by `list`)
        id: i64,

        #[arg(long, help = "New exercise name")]
        exercise: Option<String>,

        #[arg(long, help = "New repetition count")]
        reps: Option<u32>,

        #[arg(long, help = "New weight in kg")]
        weight: Option<f64>,

        #[arg(long = "type", help = "New workout type")]
        kind: Option<String>,

        #[arg(long, help = "New date/time (YYYY-MM-DD or 'YYYY-MM-DD HH:MM:SS')")]
        date: Option<String>,
    },

    /// Star or unstar workouts
    Favorite {
        /// Workout ids to toggle
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Delete workouts
    Del {
        /// Workout ids to delete
        #[arg(required_unless_present = "all")]
        ids: Vec<i64>,

        #[arg(long, conflicts_with = "ids", help = "Clear the whole history")]
        all: bool,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show today's session and the weekly summary
    Stats,

    /// Show the 4-week volume trend
    Trend,

    /// Show or set the weekly volume goal (kg·reps)
    Goal {
        #[arg(long, value_name = "VALUE", help = "Set a new weekly volume goal")]
        set: Option<i64>,
    },

    /// Show or update the profile
    Profile {
        #[arg(long, help = "Set the display name")]
        name: Option<String>,
    },

    /// Leave feedback
    Feedback {
        #[arg(required_unless_present = "list")]
        message: Option<String>,

        #[arg(long, help = "Print all recorded feedback")]
        list: bool,
    },

    /// Export the workout history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", default_value = "workouts.csv")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import workouts from a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
