use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    Res, config::Settings, error::ConvertError, management::TokenEndpoint,
    types::RefreshedToken,
};

/// Google OAuth token endpoint used by YouTube Music credentials.
pub struct GoogleTokenEndpoint {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl GoogleTokenEndpoint {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            token_url: settings.youtube_token_url.clone(),
            client_id: settings.youtube_client_id.clone(),
            client_secret: settings.youtube_client_secret.clone(),
        }
    }
}

#[async_trait]
impl TokenEndpoint for GoogleTokenEndpoint {
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Res<RefreshedToken> {
        let res = self
            .client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            return Err(ConvertError::TokenRefreshFailed(body));
        }

        Ok(res.json::<RefreshedToken>().await?)
    }
}
