//! Spotify search - look up tracks and artists on Spotify
//!
//! This library authenticates with the client-credentials grant, runs track
//! and artist searches and renders the results as plain-text reports.

/// Client modules for interacting with the Spotify Web API
pub mod clients;
/// Credentials, env file loading and client configuration
pub mod config;
/// Text rendering of search results
pub mod report;
/// Sequential search runner
pub mod search;
