use std::fmt;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};

use crate::clients::errors::{Error, Result};

/// Environment variable holding the Spotify client id
pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the Spotify client secret
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
/// Env file loaded from the working directory before credentials are read
pub const DEFAULT_ENV_FILE: &str = "dev.env";

/// Base URL of the accounts service; the token endpoint is `api/token` below it
pub const DEFAULT_AUTH_BASE_URL: &str = "https://accounts.spotify.com/";
/// Base URL of the Web API
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1/";
/// Upper bound on a whole search request
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads variables from an env file without overriding ones already set.
///
/// Returns `Ok(false)` when the file doesn't exist, so already-exported
/// variables can still be used. A file that exists but can't be parsed is a
/// configuration error.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {path:?}");
            Ok(true)
        }
        Err(e) if e.not_found() => {
            warn!("Env file {path:?} not found, using process environment only");
            Ok(false)
        }
        Err(e) => Err(Error::ConfigError(format!(
            "failed to load env file {path:?}: {e}"
        ))),
    }
}

/// Application credentials for the client-credentials grant
#[derive(Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SpotifyCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        SpotifyCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    // Read credentials from the process environment or raise a configuration error
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads both credentials through `lookup`. Missing and blank values are
    /// treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::ConfigError(format!("{key} must be set")))
        };
        let client_id = read(CLIENT_ID_VAR)?;
        let client_secret = read(CLIENT_SECRET_VAR)?;
        Ok(SpotifyCredentials {
            client_id,
            client_secret,
        })
    }
}

// Keep the secret out of logs
impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything needed to connect a [`crate::clients::SpotifyClient`]
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: SpotifyCredentials,
    pub auth_base_url: String,
    pub api_base_url: String,
    pub search_timeout: Duration,
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    credentials: Option<SpotifyCredentials>,
    auth_base_url: Option<String>,
    api_base_url: Option<String>,
    search_timeout: Option<Duration>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn credentials(mut self, credentials: SpotifyCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    /// Like [`ConfigBuilder::build`], but reads missing credentials through
    /// `lookup` instead of the process environment.
    pub fn build_with_env<F>(self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = match self.credentials {
            Some(c) => c,
            None => SpotifyCredentials::from_lookup(lookup)?,
        };
        Ok(Config {
            credentials,
            auth_base_url: self
                .auth_base_url
                .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string()),
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            search_timeout: self.search_timeout.unwrap_or(DEFAULT_SEARCH_TIMEOUT),
        })
    }
}
