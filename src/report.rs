//! Plain-text reports for search results.

use std::fmt::Write;
use std::time::Duration;

use crate::clients::entities::{Artist, Track};

const HEADER_RULE: &str = "========================================";
const ENTRY_RULE: &str = "----------------------------------------";

/// Renders a duration as `m:ss`, dropping fractions of a second.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn render_tracks(tracks: &[Track]) -> String {
    let mut out = String::new();
    // Writing into a String can't fail
    let _ = writeln!(out, "\nНайденные треки:");
    let _ = writeln!(out, "{HEADER_RULE}");
    for (i, track) in tracks.iter().enumerate() {
        let _ = writeln!(out, "{}. {} - {}", i + 1, track.name, track.artists.join(", "));
        let _ = writeln!(out, "   Альбом: {}", track.album);
        let _ = writeln!(out, "   Длительность: {}", format_duration(track.duration));
        let _ = writeln!(out, "   ID: {}", track.id);
        let _ = writeln!(out, "   Популярность: {}/100", track.popularity);
        let _ = writeln!(out, "{ENTRY_RULE}");
    }
    out
}

pub fn render_artists(artists: &[Artist]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nНайденные артисты:");
    let _ = writeln!(out, "{HEADER_RULE}");
    for (i, artist) in artists.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, artist.name);
        let _ = writeln!(out, "   Жанры: {}", artist.genres.join(", "));
        let _ = writeln!(out, "   Популярность: {}/100", artist.popularity);
        let _ = writeln!(out, "   ID: {}", artist.id);
        let _ = writeln!(out, "{ENTRY_RULE}");
    }
    out
}
