use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db::{self, filter::{present, DEFAULT_SEASON_TYPE}, Filter};
use super::Filters;
use crate::error::{ApiError, MISSING_TEAM_STATS_FILTER, MISSING_YEAR};
use crate::grouping::group_team_stats;
use crate::models::{Game, GameTeamStats};

/// Query parameters for listing games
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesQuery {
    #[serde(default)]
    pub year: Option<String>,
    /// 'regular' or 'postseason', defaults to 'regular'
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    /// Matches either the home or the away team
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub away: Option<String>,
}

impl GamesQuery {
    fn filter(&self) -> Result<Filter, ApiError> {
        let year = present(&self.year).ok_or(ApiError::BadRequest(MISSING_YEAR))?;

        let mut filter = Filter::new();
        filter
            .push("g.season = {}", year)
            .push("g.season_type = {}", present(&self.season_type).unwrap_or(DEFAULT_SEASON_TYPE))
            .push_opt("g.week = {}", present(&self.week))
            .push_either_name("away.school", "home.school", present(&self.team))
            .push_name("home.school", present(&self.home))
            .push_name("away.school", present(&self.away));

        Ok(filter)
    }
}

// GET /games?year=2018&home=michigan - List games for a season
pub async fn get_games(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<GamesQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let filter = params.filter()?;
    let rows = db::get_games(&pool, &filter).await?;

    Ok(Json(rows.iter().map(|r| r.to_game()).collect()))
}

/// Query parameters for team stats by game
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsQuery {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl TeamStatsQuery {
    fn filter(&self) -> Result<Filter, ApiError> {
        let mut filter = Filter::new();

        // A game id selects a single game and ignores the season filters
        if let Some(game_id) = present(&self.game_id) {
            filter.push("g.id = {}", game_id);
            return Ok(filter);
        }

        let week = present(&self.week);
        let team = present(&self.team);
        let year = match present(&self.year) {
            Some(year) if week.is_some() || team.is_some() => year,
            _ => return Err(ApiError::BadRequest(MISSING_TEAM_STATS_FILTER)),
        };

        filter
            .push("g.season_type = {}", present(&self.season_type).unwrap_or(DEFAULT_SEASON_TYPE))
            .push("g.season = {}", year)
            .push_opt("g.week = {}", week)
            .push_name("t.school", team);

        Ok(filter)
    }
}

/// GET /games/teams - Team stats broken down by game
///
/// Query params:
/// - gameId: a single game, or
/// - year with week and/or team (seasonType optional)
pub async fn get_team_stats(
    State(pool): State<SqlitePool>,
    Filters(params): Filters<TeamStatsQuery>,
) -> Result<Json<Vec<GameTeamStats>>, ApiError> {
    let filter = params.filter()?;
    let rows = db::get_team_stats(&pool, &filter).await?;

    Ok(Json(group_team_stats(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn games_require_year() {
        let query = GamesQuery {
            week: some("1"),
            team: some("Michigan"),
            ..Default::default()
        };
        assert!(matches!(query.filter(), Err(ApiError::BadRequest(MISSING_YEAR))));

        let query = GamesQuery {
            year: some(""),
            ..Default::default()
        };
        assert!(matches!(query.filter(), Err(ApiError::BadRequest(MISSING_YEAR))));
    }

    #[test]
    fn games_filter_defaults_season_type() {
        let query = GamesQuery {
            year: some("2018"),
            ..Default::default()
        };
        let filter = query.filter().unwrap();

        assert_eq!(filter.to_sql(), "WHERE g.season = ?1 AND g.season_type = ?2");
        assert_eq!(filter.params(), ["2018", "regular"]);
    }

    #[test]
    fn games_filter_appends_in_declared_order() {
        let query = GamesQuery {
            year: some("2018"),
            season_type: some("postseason"),
            week: some("1"),
            team: some("Clemson"),
            home: some("Alabama"),
            away: some("Clemson"),
        };
        let filter = query.filter().unwrap();

        assert_eq!(
            filter.to_sql(),
            "WHERE g.season = ?1 AND g.season_type = ?2 AND g.week = ?3 \
             AND (LOWER(away.school) = LOWER(?4) OR LOWER(home.school) = LOWER(?4)) \
             AND LOWER(home.school) = LOWER(?5) AND LOWER(away.school) = LOWER(?6)"
        );
        assert_eq!(
            filter.params(),
            ["2018", "postseason", "1", "Clemson", "Alabama", "Clemson"]
        );
    }

    #[test]
    fn team_stats_need_game_id_or_year_with_week_or_team() {
        let neither = TeamStatsQuery::default();
        assert!(matches!(
            neither.filter(),
            Err(ApiError::BadRequest(MISSING_TEAM_STATS_FILTER))
        ));

        let year_only = TeamStatsQuery {
            year: some("2018"),
            ..Default::default()
        };
        assert!(matches!(
            year_only.filter(),
            Err(ApiError::BadRequest(MISSING_TEAM_STATS_FILTER))
        ));

        let week_without_year = TeamStatsQuery {
            week: some("3"),
            ..Default::default()
        };
        assert!(week_without_year.filter().is_err());

        let year_and_week = TeamStatsQuery {
            year: some("2018"),
            week: some("3"),
            ..Default::default()
        };
        assert!(year_and_week.filter().is_ok());
    }

    #[test]
    fn team_stats_by_game_id_ignores_season_filters() {
        let query = TeamStatsQuery {
            game_id: some("401012891"),
            season_type: some("postseason"),
            week: some("3"),
            ..Default::default()
        };
        let filter = query.filter().unwrap();

        assert_eq!(filter.to_sql(), "WHERE g.id = ?1");
        assert_eq!(filter.params(), ["401012891"]);
    }

    #[test]
    fn team_stats_by_season() {
        let query = TeamStatsQuery {
            year: some("2018"),
            team: some("clemson"),
            ..Default::default()
        };
        let filter = query.filter().unwrap();

        assert_eq!(
            filter.to_sql(),
            "WHERE g.season_type = ?1 AND g.season = ?2 AND LOWER(t.school) = LOWER(?3)"
        );
        assert_eq!(filter.params(), ["regular", "2018", "clemson"]);
    }
}
