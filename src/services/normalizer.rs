// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity normalization.
//!
//! Turns raw service records into [`WalkLog`]s:
//! 1. Drop indoor walks
//! 2. Parse the creation timestamp (best effort)
//! 3. Format duration and distance in the user's units
//! 4. Extract pace and route from the embedded `activityData` document
//!
//! Nothing in here fails: bad fields degrade to `None`.

use crate::models::{ActivityDetails, RawActivity, WalkLog, DEFAULT_WALK_TYPE};
use crate::services::format::{format_distance, format_duration};
use crate::time_utils::parse_activity_timestamp;
use serde_json::Value;

/// Normalize one activity, or `None` if it is an indoor walk.
pub fn normalize(raw: &RawActivity, use_metric: bool) -> Option<WalkLog> {
    if raw.is_indoor_walk {
        return None;
    }

    let walk_type = raw
        .walk_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_WALK_TYPE)
        .to_string();

    let details = raw
        .activity_data
        .as_deref()
        .map(|payload| parse_activity_data(&raw.id, payload))
        .unwrap_or_default();

    Some(WalkLog {
        id: raw.id.clone(),
        created_at: parse_activity_timestamp(&raw.created_at),
        created_by: raw.user_id.clone(),
        duration: raw.duration.map(format_duration),
        distance: raw.distance.map(|m| format_distance(m, use_metric)),
        calories_burned: raw.calories,
        walk_type,
        avg_pace: details.average_pace,
        location_data: details.location_data,
        coordinate_array: details.coordinate_array,
    })
}

/// Normalize a batch, keeping the service's ordering.
///
/// `use_metric` is read once by the caller for the whole batch.
pub fn normalize_batch(raws: &[RawActivity], use_metric: bool) -> Vec<WalkLog> {
    let logs: Vec<WalkLog> = raws
        .iter()
        .filter_map(|raw| normalize(raw, use_metric))
        .collect();

    tracing::debug!(
        received = raws.len(),
        kept = logs.len(),
        indoor = raws.len() - logs.len(),
        "Normalized activity batch"
    );

    logs
}

/// Decode the embedded document. Anything but a JSON object is logged and
/// treated as empty.
fn parse_activity_data(activity_id: &str, payload: &str) -> ActivityDetails {
    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Object(object)) => ActivityDetails::from_object(&object),
        Ok(other) => {
            tracing::warn!(
                activity_id,
                kind = json_kind(&other),
                "activityData is not a JSON object, ignoring"
            );
            ActivityDetails::default()
        }
        Err(e) => {
            tracing::warn!(activity_id, error = %e, "Malformed activityData, ignoring");
            ActivityDetails::default()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
