// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw activity records as returned by the activity service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One activity record, before normalization.
///
/// Every field decodes leniently: `null` or a value of the wrong JSON type
/// becomes the field's default instead of failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawActivity {
    /// Activity ID (numeric IDs are kept as their decimal text)
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    /// Owner of the activity
    #[serde(deserialize_with = "lenient::string")]
    pub user_id: String,
    /// Creation timestamp (ISO 8601, format varies by client)
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: String,
    /// Duration in seconds
    #[serde(deserialize_with = "lenient::number")]
    pub duration: Option<f64>,
    /// Distance in meters
    #[serde(deserialize_with = "lenient::number")]
    pub distance: Option<f64>,
    /// Calories burned
    #[serde(deserialize_with = "lenient::number")]
    pub calories: Option<f64>,
    /// Walk type label, if the client recorded one
    #[serde(deserialize_with = "lenient::optional_string")]
    pub walk_type: Option<String>,
    /// Indoor (treadmill) walks have no route and are excluded from history
    #[serde(deserialize_with = "lenient::flag")]
    pub is_indoor_walk: bool,
    /// Embedded JSON document with pace and route detail
    #[serde(deserialize_with = "lenient::optional_string")]
    pub activity_data: Option<String>,
}

/// Response body of the walk listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityListResponse {
    /// Activities, most recent first. `None` when the service sent no data.
    ///
    /// Records are decoded one by one; a record that is not a JSON object
    /// is logged and skipped without affecting the rest of the page.
    #[serde(default, alias = "data", deserialize_with = "lenient::activities")]
    pub activities: Option<Vec<RawActivity>>,
}

mod lenient {
    use super::*;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
    }

    pub fn activities<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<RawActivity>>, D::Error> {
        let Some(records) = Option::<Vec<Value>>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let activities = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match RawActivity::deserialize(record) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping undecodable activity record");
                    None
                }
            })
            .collect();

        Ok(Some(activities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "a1",
            "userId": "u1",
            "createdAt": "2024-03-01T08:30:00Z",
            "duration": 1800,
            "distance": 2500.5,
            "calories": 120,
            "walkType": "Brisk",
            "isIndoorWalk": false,
            "activityData": "{\"averagePace\":\"12:00\"}"
        }"#;

        let raw: RawActivity = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, "a1");
        assert_eq!(raw.user_id, "u1");
        assert_eq!(raw.duration, Some(1800.0));
        assert_eq!(raw.distance, Some(2500.5));
        assert_eq!(raw.walk_type.as_deref(), Some("Brisk"));
        assert!(!raw.is_indoor_walk);
        assert!(raw.activity_data.is_some());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": "a2", "userId": "u1"}"#;

        let raw: RawActivity = serde_json::from_str(json).unwrap();
        assert!(raw.duration.is_none());
        assert!(raw.walk_type.is_none());
        assert!(!raw.is_indoor_walk);
        assert_eq!(raw.created_at, "");
    }

    #[test]
    fn list_response_accepts_data_alias_and_null() {
        let with_alias: ActivityListResponse =
            serde_json::from_str(r#"{"data": [{"id": "a", "userId": "u", "createdAt": ""}]}"#)
                .unwrap();
        assert_eq!(with_alias.activities.map(|a| a.len()), Some(1));

        let null: ActivityListResponse = serde_json::from_str(r#"{"activities": null}"#).unwrap();
        assert!(null.activities.is_none());

        let empty: ActivityListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.activities.is_none());
    }

    #[test]
    fn null_and_mistyped_fields_keep_the_record() {
        let json = r#"{
            "id": 42,
            "userId": null,
            "createdAt": null,
            "duration": "1800",
            "distance": null,
            "calories": "lots",
            "walkType": 7,
            "isIndoorWalk": null,
            "activityData": {"averagePace": "5:30"}
        }"#;

        let raw: RawActivity = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, "42");
        assert_eq!(raw.user_id, "");
        assert_eq!(raw.created_at, "");
        assert_eq!(raw.duration, Some(1800.0));
        assert!(raw.distance.is_none());
        assert!(raw.calories.is_none());
        assert!(raw.walk_type.is_none());
        assert!(!raw.is_indoor_walk);
        assert!(raw.activity_data.is_none());
    }

    #[test]
    fn null_timestamp_does_not_sink_the_page() {
        let json = r#"{"activities": [
            {"id": "good", "userId": "u", "createdAt": "2024-03-01T08:30:00Z", "isIndoorWalk": false},
            {"id": "no-date", "userId": "u", "createdAt": null, "isIndoorWalk": null}
        ]}"#;

        let page: ActivityListResponse = serde_json::from_str(json).unwrap();
        let activities = page.activities.unwrap();
        let ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "no-date"]);
        assert_eq!(activities[1].created_at, "");
        assert!(!activities[1].is_indoor_walk);
    }

    #[test]
    fn non_object_records_are_skipped() {
        let json = r#"{"activities": [
            {"id": "a", "userId": "u", "createdAt": "2024-03-01T08:30:00Z"},
            "garbage",
            null,
            {"id": "b", "userId": "u", "createdAt": "2024-03-02T08:30:00Z"}
        ]}"#;

        let page: ActivityListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = page.activities.unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
