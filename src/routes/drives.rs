use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db::{self, filter::{present, DEFAULT_SEASON_TYPE}, Filter};
use super::Filters;
use crate::error::{ApiError, MISSING_YEAR};
use crate::models::Drive;

/// Query parameters shared by the drive and play listings
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivesQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    /// Matches either the offense or the defense
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub offense: Option<String>,
    #[serde(default)]
    pub defense: Option<String>,
}

impl DrivesQuery {
    /// True when anything narrower than a whole season was requested.
    pub(crate) fn has_narrowing_filter(&self) -> bool {
        [&self.week, &self.team, &self.offense, &self.defense]
            .into_iter()
            .any(|value| present(value).is_some())
    }

    pub(crate) fn filter(&self) -> Result<Filter, ApiError> {
        let year = present(&self.year).ok_or(ApiError::BadRequest(MISSING_YEAR))?;

        let mut filter = Filter::new();
        filter
            .push("g.season = {}", year)
            .push("g.season_type = {}", present(&self.season_type).unwrap_or(DEFAULT_SEASON_TYPE))
            .push_opt("g.week = {}", present(&self.week))
            .push_either_name("offense.school", "defense.school", present(&self.team))
            .push_name("offense.school", present(&self.offense))
            .push_name("defense.school", present(&self.defense));

        Ok(filter)
    }
}

// GET /drives?year=2018&defense=virginia%20tech - List drives for a season
pub async fn get_drives(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<DrivesQuery>,
) -> Result<Json<Vec<Drive>>, ApiError> {
    let filter = params.filter()?;
    let rows = db::get_drives(&pool, &filter).await?;

    Ok(Json(rows.iter().map(|r| r.to_drive()).collect()))
}
