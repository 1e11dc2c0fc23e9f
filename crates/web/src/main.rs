use std::sync::Arc;

use anyhow::Context;
use football::{CachedMatchSource, FootballDataClient, HypeConfig};
use storage::{Database, MemoryVoteStore, PgVoteStore, VoteStore};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::streak::handlers::get_streak,
        features::home::handlers::get_home,
        features::votes::handlers::cast_vote,
        features::votes::handlers::get_vote_counts,
        features::og::handlers::get_share_card,
    ),
    components(
        schemas(
            storage::dto::CastVoteRequest,
            storage::dto::VoteCounts,
            storage::models::VoteChoice,
            football::streak::StreakData,
            football::streak::MatchDisplay,
            football::streak::NextMatch,
            football::streak::EraRecord,
            football::streak::MatchResult,
            football::streak::HomeOrAway,
            features::home::handlers::HomeResponse,
        )
    ),
    tags(
        (name = "streak", description = "Unbeaten streak endpoints"),
        (name = "votes", description = "Next-match vote endpoints"),
        (name = "og", description = "Social preview image"),
    )
)]
struct ApiDoc;

async fn vote_store(config: &Config) -> anyhow::Result<Arc<dyn VoteStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, votes are kept in memory and lost on restart");
        return Ok(Arc::new(MemoryVoteStore::new()));
    };

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

    Ok(Arc::new(PgVoteStore::new(db)))
}

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

    tracing::info!("Starting Unbeaten API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let votes = vote_store(&config).await?;

    let streak = config.streak_options();
    let client = FootballDataClient::new(config.client_config(), &streak.team)
        .context("Failed to build football-data client")?;
    let matches = Arc::new(CachedMatchSource::new(client, config.cache_config()));
    tracing::info!(
        "Tracking team {} ({}), match cache TTL {}s",
        config.team_id,
        config.team_code,
        config.match_cache_ttl.as_secs()
    );

    let state = AppState::new(
        votes,
        matches,
        streak,
        HypeConfig::default(),
    );

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
