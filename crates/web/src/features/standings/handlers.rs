use axum::{Json, extract::State};
use prode::models::Standings;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/pilotos",
    responses(
        (status = 200, description = "Current drivers' standings", body = Standings),
        (status = 404, description = "Standings not available yet")
    ),
    tag = "standings"
)]
pub async fn get_standings(State(state): State<AppState>) -> Result<Json<Standings>, WebError> {
    let standings = services::get_standings(&state).await?;

    Ok(Json(standings))
}
