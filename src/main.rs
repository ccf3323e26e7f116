use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use spotify_search::clients::{SpotifyClient, errors::Result};
use spotify_search::config;
use spotify_search::search::{SearchPlan, Searcher};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    config::load_env_file(Path::new(config::DEFAULT_ENV_FILE))?;

    info!("Authorizing client ...");
    let client = SpotifyClient::try_default().await?;

    let searcher = Searcher::new(client, SearchPlan::default());
    searcher.run(&mut std::io::stdout()).await
}
