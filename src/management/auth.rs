use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    Res,
    error::ConvertError,
    info,
    management::CredentialStore,
    success,
    types::{CredentialRecord, RefreshedToken},
};

/// OAuth token endpoint able to trade a refresh token for a new access token.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Fails with [`ConvertError::TokenRefreshFailed`] when the provider rejects the
    /// refresh token.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Res<RefreshedToken>;
}

/// Keeps the stored destination access token valid.
///
/// All reads and writes of the credential file go through one manager, which holds
/// an async mutex across load, refresh and save so two refreshes never race.
pub struct TokenManager {
    store: CredentialStore,
    endpoint: Box<dyn TokenEndpoint>,
    guard: Mutex<()>,
}

impl TokenManager {
    pub fn new(store: CredentialStore, endpoint: Box<dyn TokenEndpoint>) -> Self {
        TokenManager {
            store,
            endpoint,
            guard: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Current record as stored on disk, without refreshing.
    pub async fn current(&self) -> Res<CredentialRecord> {
        let _lock = self.guard.lock().await;
        self.store.load().await
    }

    pub async fn get_valid_access_token(&self) -> Res<String> {
        self.get_valid_access_token_at(Utc::now().timestamp()).await
    }

    /// Returns the stored access token, refreshing it first if `now >= expires_at`.
    pub async fn get_valid_access_token_at(&self, now: i64) -> Res<String> {
        let (access_token, _) = self.valid_token_at(now).await?;
        Ok(access_token)
    }

    pub async fn ensure_valid(&self) -> Res<bool> {
        self.ensure_valid_at(Utc::now().timestamp()).await
    }

    /// Makes sure a usable access token is stored.
    ///
    /// # Returns
    ///
    /// - `Ok(false)` - the stored token was still valid and left untouched
    /// - `Ok(true)` - the token had expired and was refreshed
    ///
    /// # Errors
    ///
    /// [`ConvertError::CredentialsMissing`] or [`ConvertError::TokenRefreshFailed`],
    /// both of which require a new authentication.
    pub async fn ensure_valid_at(&self, now: i64) -> Res<bool> {
        let (_, refreshed) = self.valid_token_at(now).await?;
        Ok(refreshed)
    }

    async fn valid_token_at(&self, now: i64) -> Res<(String, bool)> {
        let _lock = self.guard.lock().await;
        let record = self.store.load().await?;

        if record.is_expired_at(now) {
            info!("Access token expired. Refreshing...");
            let access_token = self.refresh_record(record, now).await?;
            return Ok((access_token, true));
        }

        Ok((record.access_token, false))
    }

    /// Unconditionally exchanges the stored refresh token for a new access token.
    pub async fn refresh(&self) -> Res<String> {
        let _lock = self.guard.lock().await;
        let record = self.store.load().await?;
        self.refresh_record(record, Utc::now().timestamp()).await
    }

    async fn refresh_record(&self, mut record: CredentialRecord, now: i64) -> Res<String> {
        if record.refresh_token.is_empty() {
            return Err(ConvertError::TokenRefreshFailed(
                "no refresh token found".to_string(),
            ));
        }

        // the file is only touched after the endpoint accepted the refresh token
        let refreshed = self
            .endpoint
            .exchange_refresh_token(&record.refresh_token)
            .await?;

        record.access_token = refreshed.access_token;
        record.expires_at = now + refreshed.expires_in;
        if let Some(rotated) = refreshed.refresh_token.filter(|t| !t.is_empty()) {
            record.refresh_token = rotated;
        }

        self.store.save(&record).await?;
        success!("Access token refreshed successfully!");

        Ok(record.access_token)
    }
}
