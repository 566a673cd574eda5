// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Walk history: fetch a user's outdoor walks and present them as cards.
//!
//! Raw activities from the activity service are normalized into
//! display-ready [`models::WalkLog`]s and rendered as a loading, empty or
//! list screen.

pub mod config;
pub mod error;
pub mod models;
pub mod screen;
pub mod services;
#[cfg(test)]
mod test_support;
pub mod time_utils;
pub mod view;

use config::Config;
use screen::HistoryScreen;
use services::{ConfiguredIdentity, HistoryLoader, HttpActivityClient, UnitPreference};
use tokio::sync::mpsc::UnboundedReceiver;
use view::ScreenState;

/// Screen wired to the HTTP activity service.
pub type AppScreen = HistoryScreen<ConfiguredIdentity, HttpActivityClient, UnitPreference>;

/// Build a screen from configuration.
///
/// Returns the screen and the receiving end of its state updates, which the
/// render loop consumes.
pub fn build_screen(
    config: &Config,
    on_selected: impl FnOnce(models::WalkLog) + Send + 'static,
) -> (AppScreen, UnboundedReceiver<ScreenState>) {
    let (updates, receiver) = tokio::sync::mpsc::unbounded_channel();

    let loader = HistoryLoader::new(
        ConfiguredIdentity::new(config.user_id.clone(), config.device_id.clone()),
        HttpActivityClient::new(config.api_base_url.clone(), config.api_token.clone()),
        UnitPreference {
            use_metric: config.use_metric,
        },
        config.history_limit,
        updates,
    );

    (
        HistoryScreen::new(loader, config.reload_policy, on_selected),
        receiver,
    )
}
