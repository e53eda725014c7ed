use super::workout_type::WorkoutType;
use crate::utils::num::{parse_float_or_default, parse_int_or_default};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// A single logged workout.
///
/// Serialized field names keep the camelCase keys of the historical data
/// format so existing store files stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64, // creation timestamp in ms; uniqueness best-effort
    pub exercise: String,
    #[serde(deserialize_with = "lenient_reps")]
    pub reps: u32,
    #[serde(default, deserialize_with = "lenient_weight")]
    pub weight: f64, // kilograms
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    #[serde(rename = "createdAt")]
    pub created_at: String, // RFC 3339, set at creation
    #[serde(default)]
    pub favorite: bool,
}

impl Workout {
    /// Build a fresh record stamped with the current instant.
    pub fn new(exercise: &str, reps: u32, weight: f64, kind: WorkoutType) -> Self {
        let now = Local::now();
        Self {
            id: now.timestamp_millis(),
            exercise: exercise.trim().to_string(),
            reps,
            weight,
            kind,
            created_at: now.to_rfc3339(),
            favorite: false,
        }
    }

    /// Parse `created_at` back into a local timestamp.
    ///
    /// Returns `None` on malformed values; aggregation treats such records
    /// as outside every date range, like the historical client did.
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        parse_timestamp(&self.created_at)
    }

    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_local().map(|dt| dt.date_naive())
    }

    /// Training volume contribution of this record, in kg·reps.
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// Accepted timestamp renderings, most specific first.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&ndt).single();
    }
    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let ndt = nd.and_hms_opt(0, 0, 0)?;
        return Local.from_local_datetime(&ndt).single();
    }
    None
}

// Historical store files may carry reps/weight as strings ("12") or junk;
// both load as their numeric value or fall back to 0.
fn lenient_reps<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let v = serde_json::Value::deserialize(de)?;
    Ok(match v {
        serde_json::Value::Number(n) => {
            n.as_u64().map_or(0, |u| u32::try_from(u).unwrap_or(u32::MAX))
        }
        serde_json::Value::String(s) => parse_int_or_default(&s),
        _ => 0,
    })
}

fn lenient_weight<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let v = serde_json::Value::deserialize(de)?;
    Ok(match v {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_float_or_default(&s),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_camel_case_keys() {
        let w = Workout::new("bench press", 10, 60.0, WorkoutType::Strength);
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"type\":\"strength\""));
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn lenient_fields_accept_strings_and_junk() {
        let json = r#"{
            "id": 1,
            "exercise": "squat",
            "reps": "12",
            "weight": "80.5",
            "type": "strength",
            "createdAt": "2025-04-07T10:00:00+00:00"
        }"#;
        let w: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(w.reps, 12);
        assert_eq!(w.weight, 80.5);
        assert!(!w.favorite);

        let json = r#"{
            "id": 2,
            "exercise": "squat",
            "reps": "a lot",
            "weight": null,
            "type": "yoga",
            "createdAt": "not a date",
            "favorite": true
        }"#;
        let w: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(w.reps, 0);
        assert_eq!(w.weight, 0.0);
        assert_eq!(w.kind, WorkoutType::Other("yoga".to_string()));
        assert!(w.created_local().is_none());
    }

    #[test]
    fn timestamp_formats() {
        assert!(parse_timestamp("2025-04-07T10:00:00+02:00").is_some());
        assert!(parse_timestamp("2025-04-07 10:00:00").is_some());
        assert!(parse_timestamp("2025-04-07").is_some());
        assert!(parse_timestamp("07/04/2025").is_none());
    }
}
