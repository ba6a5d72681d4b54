use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prode::models::Tournament;
use prode::tournaments::CreateTournamentRequest;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/torneos",
    responses(
        (status = 200, description = "List all tournaments successfully", body = Vec<Tournament>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(State(state): State<AppState>) -> Json<Vec<Tournament>> {
    Json(services::list_tournaments(&state).await)
}

#[utoipa::path(
    post,
    path = "/torneos",
    request_body = CreateTournamentRequest,
    responses(
        (status = 201, description = "Tournament created successfully", body = Tournament),
        (status = 400, description = "Validation error")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::create_tournament(&state, req).await;

    Ok((StatusCode::CREATED, Json(tournament)).into_response())
}
