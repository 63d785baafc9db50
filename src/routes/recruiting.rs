use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db::{self, filter::present, Filter};
use super::Filters;
use crate::error::{ApiError, MISSING_RECRUIT_FILTER};
use crate::models::{Recruit, TeamRecruitingRank};

/// Query parameters for individual recruits
#[derive(Debug, Default, Deserialize)]
pub struct RecruitsQuery {
    #[serde(default)]
    pub year: Option<String>,
    /// School the recruit committed to
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// State or province of origin
    #[serde(default)]
    pub state: Option<String>,
}

impl RecruitsQuery {
    fn filter(&self) -> Result<Filter, ApiError> {
        let year = present(&self.year);
        let team = present(&self.team);
        if year.is_none() && team.is_none() {
            return Err(ApiError::BadRequest(MISSING_RECRUIT_FILTER));
        }

        let mut filter = Filter::new();
        filter
            .push_opt("r.year = {}", year)
            .push_name("t.school", team)
            .push_name("r.position", present(&self.position))
            .push_name("r.state_province", present(&self.state));

        Ok(filter)
    }
}

// GET /recruiting/players?year=2019&position=QB - List recruits by ranking
pub async fn get_players(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<RecruitsQuery>,
) -> Result<Json<Vec<Recruit>>, ApiError> {
    let filter = params.filter()?;
    let recruits = db::get_recruits(&pool, &filter).await?;

    Ok(Json(recruits))
}

/// Query parameters for team recruiting rankings
#[derive(Debug, Default, Deserialize)]
pub struct TeamRankingsQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl TeamRankingsQuery {
    fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        filter
            .push_opt("rt.year = {}", present(&self.year))
            .push_name("t.school", present(&self.team));
        filter
    }
}

// GET /recruiting/teams?year=2019 - Team recruiting class rankings
pub async fn get_teams(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<TeamRankingsQuery>,
) -> Result<Json<Vec<TeamRecruitingRank>>, ApiError> {
    let ranks = db::get_team_recruiting_ranks(&pool, &params.filter()).await?;

    Ok(Json(ranks))
}
