use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod grouping;
pub mod models;
pub mod routes;

/// Builds the API router over a shared connection pool.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "College Football Stats API - v1.0" }))
        .route("/health", get(health_check))

        // Game endpoints
        .route("/games", get(routes::games::get_games))
        .route("/games/teams", get(routes::games::get_team_stats))
        .route("/drives", get(routes::drives::get_drives))
        .route("/plays", get(routes::plays::get_plays))

        // Recruiting endpoints
        .route("/recruiting/players", get(routes::recruiting::get_players))
        .route("/recruiting/teams", get(routes::recruiting::get_teams))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    db: &'static str,
    timestamp: i64,
}

// GET /health - Reports whether the database still answers
async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, db) = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!("Health check query failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "error")
        }
    };

    let response = HealthResponse {
        status,
        db,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (code, Json(response))
}
