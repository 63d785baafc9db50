use axum::{
    extract::State,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{ApiError, MISSING_PLAY_FILTER};
use crate::models::Play;
use super::{drives::DrivesQuery, Filters};

/// GET /plays - List plays
///
/// A whole season of plays is too much for one response, so a week or a team
/// (team, offense or defense) is required alongside the year.
pub async fn get_plays(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<DrivesQuery>,
) -> Result<Json<Vec<Play>>, ApiError> {
    let filter = params.filter()?;

    if !params.has_narrowing_filter() {
        return Err(ApiError::BadRequest(MISSING_PLAY_FILTER));
    }

    let rows = db::get_plays(&pool, &filter).await?;

    Ok(Json(rows.iter().map(|r| r.to_play()).collect()))
}
