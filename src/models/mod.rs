// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod walk_log;

pub use activity::{ActivityListResponse, RawActivity};
pub use walk_log::{ActivityDetails, Coordinate, LocationRecord, WalkLog, DEFAULT_WALK_TYPE};
