use std::io::Write;

use log::{debug, info, warn};

use crate::clients::{
    SpotifyClient,
    errors::{Error, Result},
};
use crate::report;

/// The two searches a run performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub track_query: String,
    pub track_limit: u32,
    pub artist_query: String,
    pub artist_limit: u32,
}

impl Default for SearchPlan {
    fn default() -> Self {
        SearchPlan {
            track_query: "надо было ставить линукс".to_string(),
            track_limit: 1,
            artist_query: "cupsize".to_string(),
            artist_limit: 3,
        }
    }
}

// Runs the planned searches against an already connected client
pub struct Searcher {
    client: SpotifyClient,
    plan: SearchPlan,
}

impl Searcher {
    pub fn new(client: SpotifyClient, plan: SearchPlan) -> Self {
        Searcher { client, plan }
    }

    /// Searches tracks, then artists, writing each report that succeeds.
    ///
    /// A failed search is logged and skipped; only fatal errors (such as a
    /// broken output) end the run early.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!("Starting searches ...");

        debug!("Searching tracks for {:?}", self.plan.track_query);
        match self
            .client
            .search_tracks(&self.plan.track_query, self.plan.track_limit)
            .await
        {
            Ok(tracks) => out.write_all(report::render_tracks(&tracks).as_bytes())?,
            Err(e) => skip_or_fail("track", e)?,
        }

        debug!("Searching artists for {:?}", self.plan.artist_query);
        match self
            .client
            .search_artists(&self.plan.artist_query, self.plan.artist_limit)
            .await
        {
            Ok(artists) => out.write_all(report::render_artists(&artists).as_bytes())?,
            Err(e) => skip_or_fail("artist", e)?,
        }

        out.flush()?;
        info!("Searches completed");
        Ok(())
    }
}

fn skip_or_fail(kind: &str, err: Error) -> Result<()> {
    if err.is_fatal() {
        return Err(err);
    }
    warn!("Error searching {kind}s: {err}");
    Ok(())
}
