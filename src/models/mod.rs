pub mod feedback;
pub mod profile;
pub mod workout;
pub mod workout_type;

pub use feedback::FeedbackEntry;
pub use profile::Profile;
pub use workout::Workout;
pub use workout_type::WorkoutType;
