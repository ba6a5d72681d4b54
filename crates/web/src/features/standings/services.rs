use prode::models::Standings;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Current standings from the cache.
///
/// If the cache has never been populated, attempt exactly one synchronous
/// refresh before giving up; a still-empty cache is surfaced as
/// `StandingsUnavailable` rather than an empty success.
pub async fn get_standings(state: &AppState) -> WebResult<Standings> {
    let mut rows = state.standings.snapshot().await;

    if rows.is_empty() {
        state
            .standings
            .refresh(&state.http, &state.standings_url)
            .await;
        rows = state.standings.snapshot().await;
    }

    if rows.is_empty() {
        return Err(WebError::StandingsUnavailable);
    }

    Ok(Standings { rows })
}
