use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub popularity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String, // empty for local files
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub duration: Duration,
    pub popularity: u32,
}

#[cfg(test)]
impl Track {
    pub fn mock(name: &str, artist: &str, duration_ms: u64) -> Self {
        Self {
            id: "mock_id".to_string(),
            name: name.to_string(),
            artists: vec![artist.to_string()],
            album: "Mock Album".to_string(),
            duration: Duration::from_millis(duration_ms),
            popularity: 50,
        }
    }
}

#[cfg(test)]
impl Artist {
    pub fn mock(name: &str, genres: &[&str]) -> Self {
        Self {
            id: "mock_id".to_string(),
            name: name.to_string(),
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            popularity: 50,
        }
    }
}
