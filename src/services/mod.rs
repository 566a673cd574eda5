// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - loading and normalization.

pub mod activity_api;
pub mod format;
pub mod identity;
pub mod loader;
pub mod normalizer;
pub mod preferences;

pub use activity_api::{ActivityService, HttpActivityClient};
pub use identity::{ConfiguredIdentity, IdentityResolver};
pub use loader::{HistoryLoader, LoadPhase};
pub use preferences::{Preferences, UnitPreference};
