// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resolution of the user id sent to the activity service.

use std::future::Future;

/// Resolves which user's history to load.
pub trait IdentityResolver: Send + Sync {
    /// Best available user id, or `None` if nobody can be identified.
    fn best_user_id(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Identity from configuration: the signed-in account, else the device id.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredIdentity {
    account_id: Option<String>,
    device_id: Option<String>,
}

impl ConfiguredIdentity {
    pub fn new(account_id: Option<String>, device_id: Option<String>) -> Self {
        Self {
            account_id,
            device_id,
        }
    }
}

impl IdentityResolver for ConfiguredIdentity {
    async fn best_user_id(&self) -> Option<String> {
        [&self.account_id, &self.device_id]
            .into_iter()
            .flatten()
            .map(|id| id.trim())
            .find(|id| !id.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefers_account_id() {
        let identity = ConfiguredIdentity::new(Some("acct".into()), Some("device".into()));
        assert_eq!(identity.best_user_id().await.as_deref(), Some("acct"));
    }

    #[tokio::test]
    async fn falls_back_to_device_id() {
        let identity = ConfiguredIdentity::new(Some("  ".into()), Some(" device ".into()));
        assert_eq!(identity.best_user_id().await.as_deref(), Some("device"));
    }

    #[tokio::test]
    async fn nobody() {
        assert!(ConfiguredIdentity::default().best_user_id().await.is_none());
    }
}
