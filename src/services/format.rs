// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Unit formatting for durations and distances.

const SECONDS_PER_HOUR: u64 = 3600;
const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.34;

/// Format a duration in seconds as `H:MM:SS` (an hour or more) or `M:SS`.
///
/// Fractional seconds are truncated. Negative and non-finite inputs are
/// treated as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / 60;
    let secs = total % 60;

    if total >= SECONDS_PER_HOUR {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format a distance in meters as kilometers or miles with two decimals.
pub fn format_distance(meters: f64, use_metric: bool) -> String {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };

    if use_metric {
        format!("{:.2} km", meters / METERS_PER_KILOMETER)
    } else {
        format!("{:.2} mi", meters / METERS_PER_MILE)
    }
}
