// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen state and rendering.
//!
//! Rendering is a pure function of [`ScreenState`]: exactly one of loading,
//! empty or the card list is shown.

use crate::models::WalkLog;
use crate::time_utils::format_card_date;
use chrono::{DateTime, Utc};
use std::fmt;

pub const EMPTY_MESSAGE: &str = "No walks yet. Head outside and your walks will show up here.";
const PLACEHOLDER: &str = "--";

/// Everything the screen shows. Always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub logs: Vec<WalkLog>,
    pub loading: bool,
}

/// What the screen renders for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedScreen {
    Loading,
    Empty,
    List(Vec<Card>),
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub date: String,
    pub distance: String,
    pub duration: String,
    pub pace: String,
}

impl Card {
    pub fn from_log(log: &WalkLog, now: DateTime<Utc>) -> Self {
        let text = |value: &Option<String>| {
            value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
        };

        Self {
            date: log
                .created_at
                .map(|date| format_card_date(date, now))
                .unwrap_or_else(|| "Unknown date".to_string()),
            distance: text(&log.distance),
            duration: text(&log.duration),
            pace: text(&log.avg_pace),
        }
    }
}

/// Pick what to show. Loading wins over everything, then empty, then the list.
pub fn render(state: &ScreenState, now: DateTime<Utc>) -> RenderedScreen {
    if state.loading {
        RenderedScreen::Loading
    } else if state.logs.is_empty() {
        RenderedScreen::Empty
    } else {
        RenderedScreen::List(state.logs.iter().map(|log| Card::from_log(log, now)).collect())
    }
}

impl fmt::Display for RenderedScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedScreen::Loading => writeln!(f, "Loading walk history..."),
            RenderedScreen::Empty => writeln!(f, "{}", EMPTY_MESSAGE),
            RenderedScreen::List(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    writeln!(f, "[{}] {}", index, card.date)?;
                    writeln!(
                        f,
                        "    Distance {}  Duration {}  Pace {}",
                        card.distance, card.duration, card.pace
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(id: &str) -> WalkLog {
        WalkLog {
            id: id.to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()),
            created_by: "u".to_string(),
            duration: Some("30:00".to_string()),
            distance: Some("2.50 km".to_string()),
            calories_burned: None,
            walk_type: "Standard".to_string(),
            avg_pace: Some("12:00".to_string()),
            location_data: None,
            coordinate_array: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn loading_takes_precedence_over_logs() {
        let state = ScreenState {
            logs: vec![log("a")],
            loading: true,
        };
        assert_eq!(render(&state, now()), RenderedScreen::Loading);
    }

    #[test]
    fn empty_when_done_and_no_logs() {
        assert_eq!(render(&ScreenState::default(), now()), RenderedScreen::Empty);
    }

    #[test]
    fn list_has_one_card_per_log() {
        let state = ScreenState {
            logs: vec![log("a"), log("b")],
            loading: false,
        };

        let RenderedScreen::List(cards) = render(&state, now()) else {
            panic!("expected list");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0],
            Card {
                date: "Mar 1, 2024".to_string(),
                distance: "2.50 km".to_string(),
                duration: "30:00".to_string(),
                pace: "12:00".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let mut sparse = log("a");
        sparse.created_at = None;
        sparse.avg_pace = None;

        let card = Card::from_log(&sparse, now());
        assert_eq!(card.date, "Unknown date");
        assert_eq!(card.pace, "--");
    }

    #[test]
    fn text_rendering() {
        let state = ScreenState {
            logs: vec![log("a")],
            loading: false,
        };
        let text = render(&state, now()).to_string();
        assert!(text.starts_with("[0] Mar 1, 2024"));
        assert!(text.contains("Distance 2.50 km"));

        assert_eq!(RenderedScreen::Empty.to_string().trim_end(), EMPTY_MESSAGE);
    }
}
