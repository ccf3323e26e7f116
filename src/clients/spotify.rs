use std::time::Duration;

use log::{debug, info};

use crate::clients::{
    entities::{Artist, Track},
    errors::{Error, Result, SearchFailure},
};
use crate::config::{Config, ConfigBuilder};
use rspotify::{
    ClientCredsSpotify, ClientError, Config as SpotifyConfig, Credentials,
    model::{FullArtist, FullTrack, SearchResult, SearchType},
    prelude::*,
};

/// Largest page the search endpoint will return
pub const MAX_SEARCH_LIMIT: u32 = 50;

impl From<FullTrack> for Track {
    fn from(f: FullTrack) -> Track {
        // negative durations clamp to zero
        let millis = u64::try_from(f.duration.num_milliseconds()).unwrap_or_default();
        Track {
            id: f.id.map(|id| id.id().to_string()).unwrap_or_default(),
            name: f.name,
            artists: f.artists.into_iter().map(|a| a.name).collect(),
            album: f.album.name,
            duration: Duration::from_millis(millis),
            popularity: f.popularity,
        }
    }
}

impl From<FullArtist> for Artist {
    fn from(f: FullArtist) -> Artist {
        Artist {
            id: f.id.id().to_string(),
            name: f.name,
            genres: f.genres,
            popularity: f.popularity,
        }
    }
}

/// Read-only Spotify client authorized with the client-credentials grant.
///
/// The token is requested once in [`SpotifyClient::connect`] and is neither
/// refreshed nor cached, so the client is meant for short-lived runs.
pub struct SpotifyClient {
    spotify: ClientCredsSpotify,
    search_timeout: Duration,
}

impl SpotifyClient {
    pub fn new(spotify: ClientCredsSpotify, search_timeout: Duration) -> Self {
        SpotifyClient {
            spotify,
            search_timeout,
        }
    }

    // Exchange the client credentials for a bearer token
    pub async fn connect(config: Config) -> Result<Self> {
        let creds = Credentials::new(
            &config.credentials.client_id,
            &config.credentials.client_secret,
        );
        debug!(
            "Requesting access token from {}api/token",
            config.auth_base_url
        );
        let spotify = ClientCredsSpotify::with_config(
            creds,
            SpotifyConfig {
                api_base_url: config.api_base_url,
                auth_base_url: config.auth_base_url,
                token_cached: false,
                token_refreshing: false,
                ..Default::default()
            },
        );
        spotify
            .request_token()
            .await
            .map_err(Error::TokenAcquisitionError)?;
        info!("Obtained Spotify access token");

        Ok(Self::new(spotify, config.search_timeout))
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub async fn try_default() -> Result<Self> {
        let config = ConfigBuilder::new().build()?;
        Self::connect(config).await
    }

    /// Searches tracks, keeping the order the API returned them in.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        match self.search(query, SearchType::Track, "tracks", limit).await? {
            SearchResult::Tracks(page) => {
                debug!("Found {} of {} tracks for {query:?}", page.items.len(), page.total);
                Ok(page.items.into_iter().map(Track::from).collect())
            }
            _ => Err(Error::NoResultsError("tracks")),
        }
    }

    /// Searches artists, keeping the order the API returned them in.
    pub async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>> {
        match self.search(query, SearchType::Artist, "artists", limit).await? {
            SearchResult::Artists(page) => {
                debug!("Found {} of {} artists for {query:?}", page.items.len(), page.total);
                Ok(page.items.into_iter().map(Artist::from).collect())
            }
            _ => Err(Error::NoResultsError("artists")),
        }
    }

    async fn search(
        &self,
        query: &str,
        kind: SearchType,
        category: &'static str,
        limit: u32,
    ) -> Result<SearchResult> {
        validate_search(query, limit)?;

        let request = self
            .spotify
            .search(query, kind, None, None, Some(limit), None);
        match tokio::time::timeout(self.search_timeout, request).await {
            Ok(Ok(result)) => Ok(result),
            // The body arrived but holds no readable result category
            Ok(Err(ClientError::ParseJson(e))) => {
                debug!("Unreadable {category} search response: {e}");
                Err(Error::NoResultsError(category))
            }
            Ok(Err(e)) => Err(SearchFailure::Client(e).into()),
            Err(_) => Err(SearchFailure::Timeout(self.search_timeout).into()),
        }
    }
}

fn validate_search(query: &str, limit: u32) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::InvalidSearch("query must not be empty".into()));
    }
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(Error::InvalidSearch(format!(
            "limit must be between 1 and {MAX_SEARCH_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}
