#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use spotitube::{
    Res,
    config::Settings,
    error::ConvertError,
    spotify::PlaylistSource,
    types::{PlaylistItem, PlaylistTracksResponse, Track, TrackArtist},
    ytmusic::MusicCatalog,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

// Helper function to create a playlist item with a single artist
pub fn item(title: &str, artist: &str) -> PlaylistItem {
    PlaylistItem {
        track: Some(Track {
            name: title.to_string(),
            artists: vec![TrackArtist {
                name: artist.to_string(),
            }],
        }),
    }
}

pub struct MockSource {
    pub name: String,
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub fail: bool,
    pub requested_ids: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new(name: &str, items: Vec<PlaylistItem>) -> Self {
        Self {
            name: name.to_string(),
            items,
            next: None,
            fail: false,
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("", Vec::new())
        }
    }
}

#[async_trait]
impl PlaylistSource for MockSource {
    async fn fetch_playlist_name(&self, playlist_id: &str) -> Res<String> {
        self.requested_ids
            .lock()
            .unwrap()
            .push(playlist_id.to_string());
        if self.fail {
            return Err(ConvertError::Api {
                endpoint: "playlists".to_string(),
                status: 404,
                body: "Resource not found".to_string(),
            });
        }
        Ok(self.name.clone())
    }

    async fn fetch_first_page(&self, _playlist_id: &str) -> Res<PlaylistTracksResponse> {
        Ok(PlaylistTracksResponse {
            items: self.items.clone(),
            next: self.next.clone(),
            total: Some(self.items.len() as u64),
        })
    }
}

#[derive(Default)]
pub struct MockCatalog {
    pub results: HashMap<String, Vec<String>>,
    pub searches: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(String, String)>>,
    pub added: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockCatalog {
    pub fn with_results(results: &[(&str, &[&str])]) -> Self {
        Self {
            results: results
                .iter()
                .map(|(query, ids)| {
                    (
                        query.to_string(),
                        ids.iter().map(|id| id.to_string()).collect(),
                    )
                })
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MusicCatalog for MockCatalog {
    async fn search_songs(&self, query: &str) -> Res<Vec<String>> {
        self.searches.lock().unwrap().push(query.to_string());
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }

    async fn create_playlist(&self, name: &str, description: &str) -> Res<String> {
        let mut created = self.created.lock().unwrap();
        created.push((name.to_string(), description.to_string()));
        Ok(format!("PL{}", created.len()))
    }

    async fn add_playlist_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()> {
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), video_ids.to_vec()));
        Ok(())
    }
}

/// A request as received by [`serve`].
pub struct Captured {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

// Helper function to start a local HTTP server answering one connection per canned reply
pub async fn serve(replies: Vec<(u16, String)>) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&captured);

    tokio::spawn(async move {
        for (status, body) in replies {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            log.lock().unwrap().push(request);

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), captured)
}

async fn read_request(socket: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body was complete");
        body.extend_from_slice(&chunk[..n]);
    }

    Captured {
        request_line,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }
}

/// Client that never goes through a proxy configured in the environment.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Settings pointing every endpoint at `base`.
pub fn local_settings(base: &str, oauth_file: PathBuf) -> Settings {
    Settings {
        spotify_client_id: "spotify-id".to_string(),
        spotify_client_secret: "spotify-secret".to_string(),
        spotify_api_url: format!("{base}/v1"),
        spotify_token_url: format!("{base}/api/token"),
        youtube_client_id: "cid".to_string(),
        youtube_client_secret: "csec".to_string(),
        youtube_token_url: format!("{base}/token"),
        ytmusic_api_url: format!("{base}/youtubei/v1"),
        oauth_file,
    }
}
