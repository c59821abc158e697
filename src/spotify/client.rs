use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    Res,
    config::Settings,
    error::ConvertError,
    spotify::{PlaylistSource, auth::ClientCredentials},
    types::{PlaylistMetadata, PlaylistTracksResponse},
};

/// Spotify Web API client for public playlists.
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    credentials: ClientCredentials,
}

impl SpotifyClient {
    pub fn new(client: Client, settings: &Settings) -> Self {
        let credentials = ClientCredentials::new(
            client.clone(),
            settings.spotify_token_url.clone(),
            settings.spotify_client_id.clone(),
            settings.spotify_client_secret.clone(),
        );

        Self {
            client,
            api_url: settings.spotify_api_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    async fn get<T: DeserializeOwned>(&self, api_url: String) -> Res<T> {
        let token = self.credentials.access_token().await?;
        let response = self.client.get(&api_url).bearer_auth(token).send().await?;
        parse_response(api_url, response).await
    }
}

#[async_trait]
impl PlaylistSource for SpotifyClient {
    async fn fetch_playlist_name(&self, playlist_id: &str) -> Res<String> {
        let api_url = format!(
            "{uri}/playlists/{id}?fields=name",
            uri = self.api_url,
            id = playlist_id
        );
        let metadata: PlaylistMetadata = self.get(api_url).await?;
        Ok(metadata.name)
    }

    async fn fetch_first_page(&self, playlist_id: &str) -> Res<PlaylistTracksResponse> {
        // default page size, no `offset`: only the first page is ever read
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.api_url,
            id = playlist_id
        );
        self.get(api_url).await
    }
}

async fn parse_response<T: DeserializeOwned>(endpoint: String, response: Response) -> Res<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ConvertError::Api {
            endpoint,
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    Ok(response.json::<T>().await?)
}
