use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_tournament, list_tournaments};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/torneos", get(list_tournaments))
        .route("/torneos", post(create_tournament))
}
