//! Durable storage for the four collections: workouts, weekly goal,
//! profile, feedback.
//!
//! Reads never fail: absent or corrupt data degrades to the empty/zero
//! default, matching the lenient contract of the historical data format.
//! Writes overwrite the whole collection and propagate real I/O errors.

pub mod backend;

use crate::errors::AppResult;
use crate::models::{FeedbackEntry, Profile, Workout};
use backend::{FileBackend, KvBackend};
use std::path::Path;

const KEY_WORKOUTS: &str = "workouts";
const KEY_GOAL: &str = "weeklyVolumeGoal";
const KEY_PROFILE: &str = "profile";
const KEY_FEEDBACK: &str = "feedback";

pub struct Store<B: KvBackend> {
    backend: B,
}

impl Store<FileBackend> {
    /// Store over the file backend rooted at `dir`.
    pub fn open(dir: &Path) -> Self {
        Self::with_backend(FileBackend::new(dir))
    }
}

impl<B: KvBackend> Store<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    fn read_or_default<T: Default + serde::de::DeserializeOwned>(&self, key: &str) -> T {
        match self.backend.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => T::default(),
        }
    }

    // ---------------------------
    // Workouts
    // ---------------------------

    pub fn workouts(&self) -> Vec<Workout> {
        self.read_or_default(KEY_WORKOUTS)
    }

    /// Overwrite the whole collection. No merge, no diffing.
    pub fn save_workouts(&mut self, records: &[Workout]) -> AppResult<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize workouts: {e}")))?;
        self.backend.set(KEY_WORKOUTS, &json)
    }

    // ---------------------------
    // Weekly goal
    // ---------------------------

    pub fn weekly_goal(&self) -> i64 {
        match self.backend.get(KEY_GOAL) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn set_weekly_goal(&mut self, goal: i64) -> AppResult<()> {
        self.backend.set(KEY_GOAL, &goal.to_string())
    }

    // ---------------------------
    // Profile
    // ---------------------------

    pub fn profile(&self) -> Profile {
        self.read_or_default(KEY_PROFILE)
    }

    pub fn set_profile(&mut self, profile: &Profile) -> AppResult<()> {
        let json = serde_json::to_string(profile)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize profile: {e}")))?;
        self.backend.set(KEY_PROFILE, &json)
    }

    // ---------------------------
    // Feedback
    // ---------------------------

    pub fn feedback(&self) -> Vec<FeedbackEntry> {
        self.read_or_default(KEY_FEEDBACK)
    }

    /// Append one entry with a fresh id and timestamp.
    /// Read-modify-write on the whole list; fine for a single writer.
    pub fn add_feedback(&mut self, message: &str) -> AppResult<FeedbackEntry> {
        let entry = FeedbackEntry::new(message);
        let mut all = self.feedback();
        all.push(entry.clone());
        let json = serde_json::to_string(&all)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize feedback: {e}")))?;
        self.backend.set(KEY_FEEDBACK, &json)?;
        Ok(entry)
    }
}
