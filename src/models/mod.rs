use serde::{Serialize, Deserialize};

/// Minutes and seconds remaining on the game clock
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Clock {
    pub minutes: i64,
    pub seconds: i64,
}

impl Clock {
    fn from_parts(minutes: Option<i64>, seconds: Option<i64>) -> Option<Clock> {
        match (minutes, seconds) {
            (None, None) => None,
            (minutes, seconds) => Some(Clock {
                minutes: minutes.unwrap_or(0),
                seconds: seconds.unwrap_or(0),
            }),
        }
    }
}

/// Line scores are stored as a JSON array of per-period points
fn parse_line_scores(raw: &Option<String>) -> Option<Vec<i64>> {
    let raw = raw.as_deref()?;
    match serde_json::from_str(raw) {
        Ok(scores) => Some(scores),
        Err(e) => {
            tracing::warn!("Skipping malformed line scores {:?}: {}", raw, e);
            None
        }
    }
}

// Games

/// Game row from the games listing query
#[derive(Debug, sqlx::FromRow)]
pub struct GameRow {
    pub id: i64,
    pub season: i64,
    pub week: i64,
    pub season_type: String,
    pub start_date: Option<String>,
    pub neutral_site: Option<bool>,
    pub conference_game: Option<bool>,
    pub attendance: Option<i64>,
    pub venue: Option<String>,
    pub home_team: String,
    pub home_points: Option<i64>,
    pub home_line_scores: Option<String>,
    pub away_team: String,
    pub away_points: Option<i64>,
    pub away_line_scores: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub season: i64,
    pub week: i64,
    pub season_type: String,
    pub start_date: Option<String>,
    pub neutral_site: Option<bool>,
    pub conference_game: Option<bool>,
    pub attendance: Option<i64>,
    pub venue: Option<String>,
    pub home_team: String,
    pub home_points: Option<i64>,
    pub home_line_scores: Option<Vec<i64>>,
    pub away_team: String,
    pub away_points: Option<i64>,
    pub away_line_scores: Option<Vec<i64>>,
}

impl GameRow {
    pub fn to_game(&self) -> Game {
        Game {
            id: self.id,
            season: self.season,
            week: self.week,
            season_type: self.season_type.clone(),
            start_date: self.start_date.clone(),
            neutral_site: self.neutral_site,
            conference_game: self.conference_game,
            attendance: self.attendance,
            venue: self.venue.clone(),
            home_team: self.home_team.clone(),
            home_points: self.home_points,
            home_line_scores: parse_line_scores(&self.home_line_scores),
            away_team: self.away_team.clone(),
            away_points: self.away_points,
            away_line_scores: parse_line_scores(&self.away_line_scores),
        }
    }
}

// Drives

#[derive(Debug, sqlx::FromRow)]
pub struct DriveRow {
    pub offense: String,
    pub defense: String,
    pub game_id: i64,
    pub id: i64,
    pub scoring: Option<bool>,
    pub start_period: Option<i64>,
    pub start_yardline: Option<i64>,
    pub start_minutes: Option<i64>,
    pub start_seconds: Option<i64>,
    pub end_period: Option<i64>,
    pub end_yardline: Option<i64>,
    pub end_minutes: Option<i64>,
    pub end_seconds: Option<i64>,
    pub elapsed_minutes: Option<i64>,
    pub elapsed_seconds: Option<i64>,
    pub plays: Option<i64>,
    pub yards: Option<i64>,
    pub drive_result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Drive {
    pub offense: String,
    pub defense: String,
    pub game_id: i64,
    pub id: i64,
    pub scoring: Option<bool>,
    pub start_period: Option<i64>,
    pub start_yardline: Option<i64>,
    pub start_time: Option<Clock>,
    pub end_period: Option<i64>,
    pub end_yardline: Option<i64>,
    pub end_time: Option<Clock>,
    pub elapsed: Option<Clock>,
    pub plays: Option<i64>,
    pub yards: Option<i64>,
    pub drive_result: String,
}

impl DriveRow {
    pub fn to_drive(&self) -> Drive {
        Drive {
            offense: self.offense.clone(),
            defense: self.defense.clone(),
            game_id: self.game_id,
            id: self.id,
            scoring: self.scoring,
            start_period: self.start_period,
            start_yardline: self.start_yardline,
            start_time: Clock::from_parts(self.start_minutes, self.start_seconds),
            end_period: self.end_period,
            end_yardline: self.end_yardline,
            end_time: Clock::from_parts(self.end_minutes, self.end_seconds),
            elapsed: Clock::from_parts(self.elapsed_minutes, self.elapsed_seconds),
            plays: self.plays,
            yards: self.yards,
            drive_result: self.drive_result.clone(),
        }
    }
}

// Plays

#[derive(Debug, sqlx::FromRow)]
pub struct PlayRow {
    pub id: i64,
    pub offense: String,
    pub defense: String,
    pub drive_id: i64,
    pub period: Option<i64>,
    pub clock_minutes: Option<i64>,
    pub clock_seconds: Option<i64>,
    pub yard_line: Option<i64>,
    pub down: Option<i64>,
    pub distance: Option<i64>,
    pub yards_gained: Option<i64>,
    pub play_type: String,
    pub play_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Play {
    pub id: i64,
    pub offense: String,
    pub defense: String,
    pub drive_id: i64,
    pub period: Option<i64>,
    pub clock: Option<Clock>,
    pub yard_line: Option<i64>,
    pub down: Option<i64>,
    pub distance: Option<i64>,
    pub yards_gained: Option<i64>,
    pub play_type: String,
    pub play_text: Option<String>,
}

impl PlayRow {
    pub fn to_play(&self) -> Play {
        Play {
            id: self.id,
            offense: self.offense.clone(),
            defense: self.defense.clone(),
            drive_id: self.drive_id,
            period: self.period,
            clock: Clock::from_parts(self.clock_minutes, self.clock_seconds),
            yard_line: self.yard_line,
            down: self.down,
            distance: self.distance,
            yards_gained: self.yards_gained,
            play_type: self.play_type.clone(),
            play_text: self.play_text.clone(),
        }
    }
}

// Team game stats

/// One stat for one team in one game, as returned by the team stats query
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TeamStatRow {
    pub id: i64,
    pub home_away: String,
    pub school: String,
    pub name: String,
    pub stat: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatEntry {
    pub category: String,
    pub stat: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamGameStats {
    pub school: String,
    pub home_away: String,
    pub stats: Vec<StatEntry>,
}

/// Team stats for both sides of a single game
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameTeamStats {
    pub id: i64,
    pub teams: Vec<TeamGameStats>,
}

// Recruiting

/// Individual recruit with their class ranking
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recruit {
    pub id: i64,
    pub year: i64,
    pub ranking: Option<i64>,
    pub name: String,
    pub committed_to: Option<String>,
    pub position: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<i64>,
    pub stars: Option<i64>,
    pub rating: Option<f64>,
    pub city: Option<String>,
    pub state_province: Option<String>,
}

/// Team recruiting class ranking for a single year
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRecruitingRank {
    pub year: i64,
    pub rank: i64,
    pub team: String,
    pub points: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_requires_at_least_one_part() {
        assert_eq!(Clock::from_parts(None, None), None);
        assert_eq!(
            Clock::from_parts(Some(7), None),
            Some(Clock { minutes: 7, seconds: 0 })
        );
    }

    #[test]
    fn line_scores_parse_from_json_text() {
        assert_eq!(parse_line_scores(&Some("[7,0,14,3]".to_string())), Some(vec![7, 0, 14, 3]));
        assert_eq!(parse_line_scores(&Some("not json".to_string())), None);
        assert_eq!(parse_line_scores(&None), None);
    }

    #[test]
    fn team_stats_serialize_home_away_in_camel_case() {
        let team = TeamGameStats {
            school: "Clemson".to_string(),
            home_away: "home".to_string(),
            stats: vec![],
        };
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["homeAway"], "home");
    }
}
