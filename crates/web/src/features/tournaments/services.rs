use prode::models::Tournament;
use prode::tournaments::CreateTournamentRequest;

use crate::state::AppState;

/// List all tournaments
pub async fn list_tournaments(state: &AppState) -> Vec<Tournament> {
    state.tournaments.list().await
}

/// Create a new tournament
pub async fn create_tournament(
    state: &AppState,
    request: CreateTournamentRequest,
) -> Tournament {
    state.tournaments.create(request).await
}
