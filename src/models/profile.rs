use serde::{Deserialize, Serialize};

/// Single-instance user profile, overwritten in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}
