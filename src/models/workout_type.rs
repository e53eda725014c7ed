use serde::{Deserialize, Serialize};

/// Category tag of a workout record.
///
/// Storage is open-ended: any tag found in persisted data is kept as
/// `Other(..)` so foreign records round-trip untouched. CLI input is
/// restricted to the three canonical tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Stretch,
    Other(String),
}

impl WorkoutType {
    /// Parse a tag coming from CLI input. Only canonical tags are accepted.
    pub fn wt_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }

    pub fn wt_as_str(&self) -> &str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Stretch => "stretch",
            WorkoutType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for WorkoutType {
    fn from(s: String) -> Self {
        match Self::wt_from_str(&s) {
            Some(t) => t,
            None => Self::Other(s),
        }
    }
}

impl From<WorkoutType> for String {
    fn from(t: WorkoutType) -> Self {
        t.wt_as_str().to_string()
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wt_as_str())
    }
}
