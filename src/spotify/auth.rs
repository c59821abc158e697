use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{Res, error::ConvertError, types::ClientCredentialsToken};

/// App-level Spotify authentication (client-credentials grant).
///
/// Reading public playlists needs no user login, so the token is obtained with
/// the application's client id and secret and cached in memory until one minute
/// before it expires.
pub struct ClientCredentials {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<(String, Instant)>>,
}

impl ClientCredentials {
    pub fn new(
        client: Client,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            client,
            token_url,
            client_id,
            client_secret,
            cached: Mutex::new(None),
        }
    }

    pub async fn access_token(&self) -> Res<String> {
        let mut cached = self.cached.lock().await;
        if let Some((token, valid_until)) = cached.as_ref() {
            if Instant::now() < *valid_until {
                return Ok(token.clone());
            }
        }

        let token = self.request_token().await?;
        let lifetime = Duration::from_secs(token.expires_in.saturating_sub(60));
        *cached = Some((token.access_token.clone(), Instant::now() + lifetime));

        Ok(token.access_token)
    }

    async fn request_token(&self) -> Res<ClientCredentialsToken> {
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Api {
                endpoint: self.token_url.clone(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<ClientCredentialsToken>().await?)
    }
}
