use anyhow::Context;
use storage::{Database, repository::TopScoreRepository, store::MemoryScoreStore};
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::top_scores::handlers;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_top_scores,
        handlers::get_top_five,
        handlers::get_top_score,
        handlers::create_top_score,
        handlers::update_top_score,
        handlers::delete_all_top_scores,
        handlers::delete_top_score,
    ),
    components(
        schemas(
            storage::dto::top_score::CreateScoreRequest,
            storage::dto::top_score::UpdateScoreRequest,
            storage::models::ScoreRecord,
            storage::models::RankedEntry,
        )
    ),
    tags(
        (name = "topScores", description = "Leaderboard score endpoints"),
    )
)]
pub struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let state = match &config.database_url {
        Some(database_url) => {
            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            AppState::new(TopScoreRepository::from(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, scores will be kept in memory only");
            AppState::new(MemoryScoreStore::new())
        }
    };

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
