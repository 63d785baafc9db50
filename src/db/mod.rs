use sqlx::sqlite::{SqlitePool, SqliteRow};
use crate::models::*;

pub mod filter;

pub use filter::Filter;

/// Runs `sql` with the filter's clause substituted for `{filter}`, binding its
/// parameters in order.
async fn fetch_filtered<T>(pool: &SqlitePool, sql: &str, filter: &Filter) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = sql.replace("{filter}", &filter.to_sql());
    tracing::debug!(predicate = %filter.to_sql(), params = ?filter.params(), "Running filtered query");

    let mut query = sqlx::query_as::<_, T>(&sql);
    for param in filter.params() {
        query = query.bind(param.as_str());
    }

    query.fetch_all(pool).await
}

// Game queries
pub async fn get_games(pool: &SqlitePool, filter: &Filter) -> Result<Vec<GameRow>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT g.id, g.season, g.week, g.season_type, g.start_date, g.neutral_site,
                  g.conference_game, g.attendance, v.name AS venue,
                  home.school AS home_team, gt.points AS home_points, gt.line_scores AS home_line_scores,
                  away.school AS away_team, gt2.points AS away_points, gt2.line_scores AS away_line_scores
           FROM game g
               INNER JOIN game_team gt ON g.id = gt.game_id AND gt.home_away = 'home'
               INNER JOIN team home ON gt.team_id = home.id
               INNER JOIN game_team gt2 ON g.id = gt2.game_id AND gt2.home_away = 'away'
               INNER JOIN team away ON gt2.team_id = away.id
               LEFT JOIN venue v ON g.venue_id = v.id
           {filter}
           ORDER BY g.season, g.week, g.start_date"#,
        filter,
    )
    .await
}

// Drive queries
pub async fn get_drives(pool: &SqlitePool, filter: &Filter) -> Result<Vec<DriveRow>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT offense.school AS offense, defense.school AS defense, g.id AS game_id, d.id,
                  d.scoring, d.start_period, d.start_yardline, d.start_minutes, d.start_seconds,
                  d.end_period, d.end_yardline, d.end_minutes, d.end_seconds,
                  d.elapsed_minutes, d.elapsed_seconds, d.plays, d.yards, dr.name AS drive_result
           FROM game g
               INNER JOIN drive d ON g.id = d.game_id
               INNER JOIN team offense ON d.offense_id = offense.id
               INNER JOIN team defense ON d.defense_id = defense.id
               INNER JOIN drive_result dr ON d.result_id = dr.id
           {filter}
           ORDER BY d.id"#,
        filter,
    )
    .await
}

// Play queries
pub async fn get_plays(pool: &SqlitePool, filter: &Filter) -> Result<Vec<PlayRow>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT p.id, offense.school AS offense, defense.school AS defense, d.id AS drive_id,
                  p.period, p.clock_minutes, p.clock_seconds, p.yard_line, p.down, p.distance,
                  p.yards_gained, pt.text AS play_type, p.play_text
           FROM game g
               INNER JOIN drive d ON g.id = d.game_id
               INNER JOIN play p ON d.id = p.drive_id
               INNER JOIN team offense ON p.offense_id = offense.id
               INNER JOIN team defense ON p.defense_id = defense.id
               INNER JOIN play_type pt ON p.play_type_id = pt.id
           {filter}
           ORDER BY d.id, p.id"#,
        filter,
    )
    .await
}

// Team stat queries - one row per (game, team, stat)
pub async fn get_team_stats(pool: &SqlitePool, filter: &Filter) -> Result<Vec<TeamStatRow>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT g.id, gt.home_away, t.school, tst.name, gts.stat
           FROM team t
               INNER JOIN game_team gt ON t.id = gt.team_id
               INNER JOIN game g ON gt.game_id = g.id
               INNER JOIN game_team_stat gts ON gts.game_team_id = gt.id
               INNER JOIN team_stat_type tst ON gts.type_id = tst.id
           {filter}
           ORDER BY g.id, gt.id, gts.id"#,
        filter,
    )
    .await
}

// Recruiting queries
pub async fn get_recruits(pool: &SqlitePool, filter: &Filter) -> Result<Vec<Recruit>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT r.id, r.year, r.ranking, r.name, t.school AS committed_to, r.position,
                  r.height, r.weight, r.stars, r.rating, r.city, r.state_province
           FROM recruit r
               LEFT JOIN team t ON r.committed_to_id = t.id
           {filter}
           ORDER BY r.year, r.ranking"#,
        filter,
    )
    .await
}

pub async fn get_team_recruiting_ranks(
    pool: &SqlitePool,
    filter: &Filter,
) -> Result<Vec<TeamRecruitingRank>, sqlx::Error> {
    fetch_filtered(
        pool,
        r#"SELECT rt.year, rt.rank, t.school AS team, rt.points
           FROM recruiting_team rt
               INNER JOIN team t ON rt.team_id = t.id
           {filter}
           ORDER BY rt.year, rt.rank"#,
        filter,
    )
    .await
}
