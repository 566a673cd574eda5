// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime, Utc};

/// ISO 8601 without a zone designator; `%.f` also takes an optional fraction.
const NAIVE_ISO8601_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NAIVE_ISO8601: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse an activity timestamp, best effort.
///
/// Tries RFC 3339 first (with or without fractional seconds), then the same
/// layout without a zone designator, read as UTC. Returns `None` when
/// neither matches.
pub fn parse_activity_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, NAIVE_ISO8601_FRACTIONAL)
                .or_else(|_| NaiveDateTime::parse_from_str(raw, NAIVE_ISO8601))
                .map(|naive| naive.and_utc())
                .ok()
        })
}

/// Format a card date relative to `now`.
///
/// "Today" and "Yesterday" for recent walks, otherwise a medium date such
/// as "Mar 1, 2024".
pub fn format_card_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.date_naive().signed_duration_since(date.date_naive()).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
