// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the activity client and the loader.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Activity API error: {0}")]
    ActivityApi(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Message used when the activity service rejects our credentials.
    pub const UNAUTHORIZED: &'static str = "Unauthorized: check WALK_API_TOKEN";
    /// Message used when the activity service throttles us.
    pub const RATE_LIMITED: &'static str = "Rate limit exceeded";

    /// Whether this error came from the service rejecting our credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::ActivityApi(msg) if msg == Self::UNAUTHORIZED)
    }

    /// Whether this error came from the service throttling requests.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::ActivityApi(msg) if msg == Self::RATE_LIMITED)
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AppError>;
