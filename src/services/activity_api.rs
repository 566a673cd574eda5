// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity service client for fetching walk history.

use crate::error::{AppError, Result};
use crate::models::ActivityListResponse;
use serde::Deserialize;
use std::future::Future;

/// Source of raw walk activities.
pub trait ActivityService: Send + Sync {
    /// Fetch up to `limit` most-recent walks for `user_id`.
    fn get_walks(
        &self,
        user_id: &str,
        limit: u32,
    ) -> impl Future<Output = Result<ActivityListResponse>> + Send;
}

/// HTTP client for the activity service.
#[derive(Clone)]
pub struct HttpActivityClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpActivityClient {
    /// Create a new client. `base_url` must not end with a slash.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token,
        }
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Activity service rate limit hit (429)");
                return Err(AppError::ActivityApi(AppError::RATE_LIMITED.to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::ActivityApi(AppError::UNAUTHORIZED.to_string()));
            }

            return Err(AppError::ActivityApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ActivityApi(format!("JSON parse error: {}", e)))
    }
}

impl ActivityService for HttpActivityClient {
    async fn get_walks(&self, user_id: &str, limit: u32) -> Result<ActivityListResponse> {
        if user_id.is_empty() {
            return Err(AppError::BadRequest("user_id must not be empty".to_string()));
        }

        let url = format!("{}/walks", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .query(&[("userId", user_id.to_string()), ("limit", limit.to_string())]);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ActivityApi(e.to_string()))?;

        self.check_response_json(response).await
    }
}
