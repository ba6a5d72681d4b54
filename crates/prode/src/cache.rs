use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::Result;
use crate::extract;
use crate::models::StandingsRow;

/// Process-wide snapshot of the last successful standings extraction.
///
/// The cache starts empty and is only ever mutated by whole-sequence
/// replacement, so readers see either nothing or a complete ranking.
/// A failed or empty extraction never overwrites previously cached rows;
/// stale data is preferred over no data.
#[derive(Clone, Default)]
pub struct StandingsCache {
    rows: Arc<RwLock<Vec<StandingsRow>>>,
}

impl StandingsCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cloned copy of the current contents.
    pub async fn snapshot(&self) -> Vec<StandingsRow> {
        self.rows.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Replace the whole cached sequence.
    pub async fn replace(&self, rows: Vec<StandingsRow>) {
        *self.rows.write().await = rows;
    }

    /// Attempt a refresh against `url`.
    ///
    /// Never fails from the caller's perspective; returns the number of
    /// rows applied, 0 when the cache was left untouched.
    pub async fn refresh(&self, client: &reqwest::Client, url: &str) -> usize {
        info!(url, at = %chrono::Local::now(), "refreshing standings");
        let outcome = extract::fetch_standings(client, url).await;
        self.apply(outcome).await
    }

    /// Fold an extraction outcome into the cache: a non-empty result
    /// replaces the contents, anything else keeps the previous rows.
    pub async fn apply(&self, outcome: Result<Vec<StandingsRow>>) -> usize {
        match outcome {
            Ok(rows) if !rows.is_empty() => {
                let count = rows.len();
                self.replace(rows).await;
                info!(rows = count, "standings cache updated");
                count
            }
            Ok(_) => {
                warn!("source yielded zero parseable rows, keeping previous standings");
                0
            }
            Err(e) => {
                warn!(error = %e, "standings refresh failed, keeping previous standings");
                0
            }
        }
    }
}
