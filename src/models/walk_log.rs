// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Display-ready walk records and the embedded route/pace document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Walk type shown when the client did not record one.
pub const DEFAULT_WALK_TYPE: &str = "Standard";

/// Untyped location sample, passed through as the client recorded it.
pub type LocationRecord = Map<String, Value>;

/// One outdoor walk, normalized for display.
///
/// Built fresh from a [`RawActivity`](crate::models::RawActivity) on every
/// load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkLog {
    pub id: String,
    /// `None` when the service timestamp could not be parsed
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: String,
    /// Formatted as `M:SS` or `H:MM:SS`
    pub duration: Option<String>,
    /// Formatted with a unit suffix, e.g. `2.50 km`
    pub distance: Option<String>,
    pub calories_burned: Option<f64>,
    pub walk_type: String,
    pub avg_pace: Option<String>,
    pub location_data: Option<Vec<LocationRecord>>,
    pub coordinate_array: Option<Vec<Coordinate>>,
}

/// A route point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    pub lon: f64,
}

/// Typed view of the `activityData` document.
///
/// Every field is extracted on its own; a missing or mis-shaped field leaves
/// only that field empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDetails {
    pub average_pace: Option<String>,
    pub location_data: Option<Vec<LocationRecord>>,
    pub coordinate_array: Option<Vec<Coordinate>>,
}

impl ActivityDetails {
    /// Extract the known fields from a decoded JSON object.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let average_pace = object
            .get("averagePace")
            .and_then(Value::as_str)
            .map(str::to_string);

        // Every element must be an object, otherwise the field is dropped
        let location_data = object
            .get("locationData")
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_object().cloned())
                    .collect::<Option<Vec<_>>>()
            });

        let coordinate_array = object
            .get("coordinateArray")
            .and_then(|value| Vec::<Coordinate>::deserialize(value).ok());

        Self {
            average_pace,
            location_data,
            coordinate_array,
        }
    }
}
