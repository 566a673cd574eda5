// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk history loading.
//!
//! Handles the load workflow:
//! 1. Publish a loading state
//! 2. Resolve the user id
//! 3. Fetch recent walks from the activity service
//! 4. Normalize them and publish the result
//!
//! Every published [`ScreenState`] goes through one channel to the render
//! loop. A run that has been superseded or invalidated publishes nothing.

use crate::models::WalkLog;
use crate::services::identity::IdentityResolver;
use crate::services::normalizer::normalize_batch;
use crate::services::preferences::Preferences;
use crate::services::ActivityService;
use crate::view::ScreenState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// Where a load currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Resolving,
    Fetching,
    Normalizing,
    Ready,
}

/// Loads walk history using injected collaborators.
pub struct HistoryLoader<I, S, P> {
    identity: I,
    activities: S,
    preferences: P,
    limit: u32,
    /// Last published state, guarded together with the phase
    inner: Mutex<Inner>,
    /// Incremented for every run and on invalidation
    generation: AtomicU64,
    updates: UnboundedSender<ScreenState>,
}

struct Inner {
    state: ScreenState,
    phase: LoadPhase,
}

impl<I, S, P> HistoryLoader<I, S, P> {
    pub fn new(
        identity: I,
        activities: S,
        preferences: P,
        limit: u32,
        updates: UnboundedSender<ScreenState>,
    ) -> Self {
        Self {
            identity,
            activities,
            preferences,
            limit,
            inner: Mutex::new(Inner {
                state: ScreenState::default(),
                phase: LoadPhase::Idle,
            }),
            generation: AtomicU64::new(0),
            updates,
        }
    }

    /// Last published state.
    pub fn state(&self) -> ScreenState {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// Make any in-flight run stale so it never publishes again.
    pub fn invalidate(&self) {
        let _inner = self.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_current(&self, run: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == run
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I, S, P> HistoryLoader<I, S, P>
where
    I: IdentityResolver,
    S: ActivityService,
    P: Preferences,
{
    /// Run one load.
    ///
    /// Returns the final published state, or `None` if the run was
    /// superseded or invalidated before it finished.
    pub async fn load_history(&self) -> Option<ScreenState> {
        let run = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let previous = self.state().logs;
        self.publish(run, previous.clone(), true, LoadPhase::Resolving)?;

        let Some(user_id) = self.identity.best_user_id().await else {
            tracing::info!("No user id available, skipping walk history fetch");
            return self.publish(run, previous, false, LoadPhase::Ready);
        };

        self.set_phase(run, LoadPhase::Fetching)?;
        tracing::info!(user_id = %user_id, limit = self.limit, "Fetching walk history");

        let logs = match self.activities.get_walks(&user_id, self.limit).await {
            Ok(response) => {
                self.set_phase(run, LoadPhase::Normalizing)?;
                match response.activities {
                    Some(raws) => {
                        let use_metric = self.preferences.use_metric_system();
                        normalize_batch(&raws, use_metric)
                    }
                    None => Vec::new(),
                }
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to fetch walk history");
                Vec::new()
            }
        };

        tracing::info!(count = logs.len(), "Walk history loaded");
        self.publish(run, logs, false, LoadPhase::Ready)
    }

    /// Replace the state as a whole and send it to the render loop, unless
    /// `run` is stale.
    fn publish(
        &self,
        run: u64,
        logs: Vec<WalkLog>,
        loading: bool,
        phase: LoadPhase,
    ) -> Option<ScreenState> {
        let mut inner = self.lock();
        if !self.is_current(run) {
            tracing::debug!(run, "Discarding result of stale load");
            return None;
        }

        inner.state = ScreenState { logs, loading };
        inner.phase = phase;

        if self.updates.send(inner.state.clone()).is_err() {
            tracing::debug!("Render loop has gone away");
        }

        Some(inner.state.clone())
    }

    fn set_phase(&self, run: u64, phase: LoadPhase) -> Option<()> {
        let mut inner = self.lock();
        if !self.is_current(run) {
            return None;
        }
        inner.phase = phase;
        Some(())
    }
}
