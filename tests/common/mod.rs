//! In-process stand-in for the Spotify accounts and search endpoints.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use spotify_search::config::{ConfigBuilder, SpotifyCredentials};
use tokio::net::TcpListener;

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    search_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    token_status: StatusCode,
    // keyed by the `type` query parameter; unknown types answer 500
    responses: Arc<HashMap<String, Value>>,
    delay: Duration,
}

pub struct MockSpotify {
    token_status: StatusCode,
    responses: HashMap<String, Value>,
    delay: Duration,
}

impl MockSpotify {
    pub fn new() -> Self {
        MockSpotify {
            token_status: StatusCode::OK,
            responses: HashMap::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn token_status(mut self, status: StatusCode) -> Self {
        self.token_status = status;
        self
    }

    pub fn respond(mut self, search_type: &str, body: Value) -> Self {
        self.responses.insert(search_type.to_string(), body);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn start(self) -> MockServer {
        let hits = Arc::new(AtomicUsize::new(0));
        let search_requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            hits: hits.clone(),
            search_requests: search_requests.clone(),
            token_status: self.token_status,
            responses: Arc::new(self.responses),
            delay: self.delay,
        };

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/search", get(search))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            base_url,
            hits,
            search_requests,
        }
    }
}

pub struct MockServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    search_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockServer {
    /// Builder pointed at this server, without credentials
    pub fn config(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .auth_base_url(self.base_url.clone())
            .api_base_url(format!("{}v1/", self.base_url))
    }

    /// Builder pointed at this server, with valid-looking credentials
    pub fn authorized_config(&self) -> ConfigBuilder {
        self.config()
            .credentials(SpotifyCredentials::new("mock-client", "mock-secret"))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn search_requests(&self) -> Vec<HashMap<String, String>> {
        self.search_requests.lock().unwrap().clone()
    }
}

async fn token(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.token_status.is_success() {
        Json(json!({
            "access_token": "mock-token",
            "token_type": "Bearer",
            "expires_in": 3600
        }))
        .into_response()
    } else {
        (
            state.token_status,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response()
    }
}

async fn search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.search_requests.lock().unwrap().push(params.clone());
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let search_type = params.get("type").cloned().unwrap_or_default();
    match state.responses.get(&search_type) {
        Some(body) => Json(body.clone()).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "status": 500, "message": "mock failure" } })),
        )
            .into_response(),
    }
}

pub fn page(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({
        "href": "https://api.spotify.com/v1/search",
        "items": items,
        "limit": 20,
        "next": null,
        "offset": 0,
        "previous": null,
        "total": total
    })
}

pub fn tracks_body(items: Vec<Value>) -> Value {
    json!({ "tracks": page(items) })
}

pub fn artists_body(items: Vec<Value>) -> Value {
    json!({ "artists": page(items) })
}

pub fn track_json(
    id: &str,
    name: &str,
    artist: &str,
    album: &str,
    duration_ms: u64,
    popularity: u32,
) -> Value {
    json!({
        "album": {
            "album_type": "album",
            "artists": [],
            "available_markets": [],
            "external_urls": {},
            "href": "https://api.spotify.com/v1/albums/6akEvsycLGftJxYudPjmqK",
            "id": "6akEvsycLGftJxYudPjmqK",
            "images": [],
            "name": album,
            "release_date": "2020-01-01",
            "release_date_precision": "day",
            "total_tracks": 1,
            "type": "album",
            "uri": "spotify:album:6akEvsycLGftJxYudPjmqK"
        },
        "artists": [artist_ref(artist)],
        "available_markets": [],
        "disc_number": 1,
        "duration_ms": duration_ms,
        "explicit": false,
        "external_ids": {},
        "external_urls": {},
        "href": format!("https://api.spotify.com/v1/tracks/{id}"),
        "id": id,
        "is_local": false,
        "name": name,
        "popularity": popularity,
        "preview_url": null,
        "track_number": 1,
        "type": "track",
        "uri": format!("spotify:track:{id}")
    })
}

fn artist_ref(name: &str) -> Value {
    json!({
        "external_urls": {},
        "href": "https://api.spotify.com/v1/artists/0TnOYISbd1XYRBk9myaseg",
        "id": "0TnOYISbd1XYRBk9myaseg",
        "name": name,
        "type": "artist",
        "uri": "spotify:artist:0TnOYISbd1XYRBk9myaseg"
    })
}

pub fn artist_json(id: &str, name: &str, genres: &[&str], popularity: u32) -> Value {
    json!({
        "external_urls": {},
        "followers": { "href": null, "total": 1000 },
        "genres": genres,
        "href": format!("https://api.spotify.com/v1/artists/{id}"),
        "id": id,
        "images": [],
        "name": name,
        "popularity": popularity,
        "type": "artist",
        "uri": format!("spotify:artist:{id}")
    })
}
