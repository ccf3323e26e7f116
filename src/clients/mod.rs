/// Data entities for tracks and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use entities::{Artist, Track};
pub use spotify::SpotifyClient;
