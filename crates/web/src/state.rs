use prode::extract::STANDINGS_URL;
use prode::{StandingsCache, TournamentStore};

/// Shared application state handed to every handler.
///
/// Owning the standings source URL here lets tests point the fallback
/// refresh at a fake or unreachable source instead of the live site.
#[derive(Clone)]
pub struct AppState {
    pub standings: StandingsCache,
    pub tournaments: TournamentStore,
    pub http: reqwest::Client,
    pub standings_url: String,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(STANDINGS_URL)
    }

    pub fn with_source(standings_url: impl Into<String>) -> Self {
        Self {
            standings: StandingsCache::new(),
            tournaments: TournamentStore::seeded(),
            http: reqwest::Client::new(),
            standings_url: standings_url.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
