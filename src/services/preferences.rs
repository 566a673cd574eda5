// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User display preferences.

/// Read-only view of the user's display preferences.
pub trait Preferences: Send + Sync {
    fn use_metric_system(&self) -> bool;
}

/// Fixed unit preference, typically taken from [`Config`](crate::config::Config).
#[derive(Debug, Clone, Copy)]
pub struct UnitPreference {
    pub use_metric: bool,
}

impl Preferences for UnitPreference {
    fn use_metric_system(&self) -> bool {
        self.use_metric
    }
}
