use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    Res,
    error::ConvertError,
    management::TokenManager,
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, EditPlaylistAction, EditPlaylistRequest,
        EditPlaylistResponse,
    },
    ytmusic::{MusicCatalog, search},
};

const ORIGIN: &str = "https://music.youtube.com";

/// `params` value selecting the "songs" filter of the search endpoint.
pub const SONGS_FILTER: &str = "EgWKAQIIAWoMEA4QChADEAQQCRAF";

/// YouTube Music InnerTube client authenticated with the stored OAuth credential.
///
/// The access token is validated (and refreshed when expired) through the
/// [`TokenManager`] before every request.
pub struct YtMusicClient {
    client: Client,
    api_url: String,
    tokens: Arc<TokenManager>,
}

impl YtMusicClient {
    pub fn new(client: Client, api_url: &str, tokens: Arc<TokenManager>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Res<Value> {
        let token = self.tokens.get_valid_access_token().await?;

        let mut payload = serde_json::to_value(body)?;
        if let Value::Object(map) = &mut payload {
            map.insert("context".to_string(), client_context());
        }

        let api_url = format!("{uri}/{endpoint}?alt=json", uri = self.api_url);
        let response = self
            .client
            .post(&api_url)
            .bearer_auth(token)
            .header("X-Goog-AuthUser", "0")
            .header("X-Origin", ORIGIN)
            .header("Origin", ORIGIN)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

fn client_context() -> Value {
    json!({
        "client": {
            "clientName": "WEB_REMIX",
            "clientVersion": format!("1.{}.01.00", Utc::now().format("%Y%m%d")),
            "hl": "en",
        },
        "user": {},
    })
}

#[async_trait]
impl MusicCatalog for YtMusicClient {
    async fn search_songs(&self, query: &str) -> Res<Vec<String>> {
        let body = json!({
            "query": query,
            "params": SONGS_FILTER,
        });
        let value = self.post("search", &body).await?;
        Ok(search::song_video_ids(&value))
    }

    async fn create_playlist(&self, name: &str, description: &str) -> Res<String> {
        let body = CreatePlaylistRequest {
            title: name.to_string(),
            description: description.to_string(),
            privacy_status: "PRIVATE".to_string(),
        };
        let value = self.post("playlist/create", &body).await?;
        let response: CreatePlaylistResponse = serde_json::from_value(value)?;
        Ok(response.playlist_id)
    }

    async fn add_playlist_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()> {
        let body = EditPlaylistRequest {
            playlist_id: playlist_id.to_string(),
            actions: video_ids
                .iter()
                .map(|id| EditPlaylistAction {
                    action: "ACTION_ADD_VIDEO".to_string(),
                    added_video_id: id.clone(),
                    dedupe_option: "DEDUPE_OPTION_SKIP".to_string(),
                })
                .collect(),
        };
        let value = self.post("browse/edit_playlist", &body).await?;
        let response: EditPlaylistResponse = serde_json::from_value(value.clone())?;

        match response.status.as_deref() {
            Some("STATUS_SUCCEEDED") => Ok(()),
            _ => Err(ConvertError::Api {
                endpoint: "browse/edit_playlist".to_string(),
                status: 200,
                body: value.to_string(),
            }),
        }
    }
}
