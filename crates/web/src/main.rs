use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use prode::RefreshSchedule;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::standings::handlers::get_standings,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::create_tournament,
    ),
    components(
        schemas(
            prode::models::Standings,
            prode::models::StandingsRow,
            prode::models::Tournament,
            prode::tournaments::CreateTournamentRequest,
        )
    ),
    tags(
        (name = "standings", description = "Scraped drivers' standings endpoints"),
        (name = "tournaments", description = "Tournament endpoints"),
    )
)]
struct ApiDoc;

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(features::standings::routes::routes())
        .merge(features::tournaments::routes::routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Prode API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let state = AppState::new();

    // Populate the cache before accepting requests so the first read
    // usually finds data.
    tracing::info!("Running startup standings refresh");
    state
        .standings
        .refresh(&state.http, &state.standings_url)
        .await;

    tokio::spawn(RefreshSchedule::default().run(
        state.standings.clone(),
        state.http.clone(),
        state.standings_url.clone(),
    ));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
