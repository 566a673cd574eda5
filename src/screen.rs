// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk history screen controller.
//!
//! Owns the in-flight load task and the selection callback. Load results
//! reach the render loop through the loader's channel; this type only
//! decides when loads start, when they are cancelled, and when the screen
//! closes.

use crate::models::WalkLog;
use crate::services::identity::IdentityResolver;
use crate::services::loader::HistoryLoader;
use crate::services::preferences::Preferences;
use crate::services::ActivityService;
use crate::view::ScreenState;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// What `reload` does while a previous load has not finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Abort the running load and start a new one
    CancelAndReplace,
    /// Keep the running load and drop the request
    IgnoreWhileInFlight,
}

impl FromStr for ReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cancel" | "cancel-and-replace" => Ok(Self::CancelAndReplace),
            "ignore" | "ignore-while-in-flight" => Ok(Self::IgnoreWhileInFlight),
            other => Err(format!("unknown reload policy: {}", other)),
        }
    }
}

type SelectionCallback = Box<dyn FnOnce(WalkLog) + Send>;

/// Walk history screen.
pub struct HistoryScreen<I, S, P> {
    loader: Arc<HistoryLoader<I, S, P>>,
    policy: ReloadPolicy,
    task: Option<JoinHandle<Option<ScreenState>>>,
    on_selected: Option<SelectionCallback>,
    closed: bool,
}

impl<I, S, P> HistoryScreen<I, S, P> {
    /// Create a screen. `on_selected` runs at most once, when a card is
    /// selected.
    pub fn new(
        loader: HistoryLoader<I, S, P>,
        policy: ReloadPolicy,
        on_selected: impl FnOnce(WalkLog) + Send + 'static,
    ) -> Self {
        Self {
            loader: Arc::new(loader),
            policy,
            task: None,
            on_selected: Some(Box::new(on_selected)),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether a load task is still running.
    pub fn is_loading(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Last published state.
    pub fn state(&self) -> ScreenState {
        self.loader.state()
    }

    /// Close the screen. Pending work is aborted and its results discarded;
    /// the selection callback is dropped without running.
    pub fn dismiss(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.loader.invalidate();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.on_selected = None;
        tracing::debug!("Walk history screen dismissed");
    }

    /// Select the card at `index` in the current list.
    ///
    /// Runs the selection callback with that walk and closes the screen.
    /// Returns `false` when nothing was selected: the screen is closed, still
    /// loading, or `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.closed {
            return false;
        }

        let state = self.loader.state();
        if state.loading {
            return false;
        }
        let Some(log) = state.logs.into_iter().nth(index) else {
            tracing::debug!(index, "Selection out of range");
            return false;
        };

        tracing::info!(walk_id = %log.id, "Walk selected");
        if let Some(on_selected) = self.on_selected.take() {
            on_selected(log);
        }
        self.dismiss();
        true
    }
}

impl<I, S, P> HistoryScreen<I, S, P>
where
    I: IdentityResolver + 'static,
    S: ActivityService + 'static,
    P: Preferences + 'static,
{
    /// Start the initial load. Must be called from within a tokio runtime.
    pub fn open(&mut self) -> bool {
        self.reload()
    }

    /// Start a load, applying the reload policy if one is already running.
    ///
    /// Returns whether a new load was started.
    pub fn reload(&mut self) -> bool {
        if self.closed {
            return false;
        }

        if self.is_loading() {
            match self.policy {
                ReloadPolicy::IgnoreWhileInFlight => {
                    tracing::debug!("Load already in flight, ignoring reload");
                    return false;
                }
                ReloadPolicy::CancelAndReplace => {
                    tracing::debug!("Cancelling in-flight load");
                    self.loader.invalidate();
                    if let Some(task) = self.task.take() {
                        task.abort();
                    }
                }
            }
        }

        let loader = Arc::clone(&self.loader);
        self.task = Some(tokio::spawn(async move { loader.load_history().await }));
        true
    }

    /// Wait for the current load task, if any, and return its final state.
    ///
    /// `None` if there is no task, or it was cancelled or superseded.
    pub async fn wait(&mut self) -> Option<ScreenState> {
        let task = self.task.take()?;
        task.await.ok().flatten()
    }
}

impl<I, S, P> Drop for HistoryScreen<I, S, P> {
    fn drop(&mut self) {
        self.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reload_policy() {
        assert_eq!(
            "cancel".parse::<ReloadPolicy>(),
            Ok(ReloadPolicy::CancelAndReplace)
        );
        assert_eq!(
            " Ignore ".parse::<ReloadPolicy>(),
            Ok(ReloadPolicy::IgnoreWhileInFlight)
        );
        assert!("retry".parse::<ReloadPolicy>().is_err());
    }
}
