use indexmap::IndexMap;
use crate::models::{GameTeamStats, StatEntry, TeamGameStats, TeamStatRow};

/// Folds flat team stat rows into games, then teams, then stats.
///
/// Games and teams keep the order in which they first appear in `rows`, as
/// do the stats within each team. A team's home/away flag is taken from its
/// first row in the game.
pub fn group_team_stats(rows: Vec<TeamStatRow>) -> Vec<GameTeamStats> {
    let mut games: IndexMap<i64, IndexMap<String, TeamGameStats>> = IndexMap::new();

    for row in rows {
        let teams = games.entry(row.id).or_default();
        let team = teams.entry(row.school).or_insert_with_key(|school| TeamGameStats {
            school: school.clone(),
            home_away: row.home_away,
            stats: Vec::new(),
        });

        team.stats.push(StatEntry {
            category: row.name,
            stat: row.stat,
        });
    }

    games
        .into_iter()
        .map(|(id, teams)| GameTeamStats {
            id,
            teams: teams.into_values().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, home_away: &str, school: &str, name: &str, stat: &str) -> TeamStatRow {
        TeamStatRow {
            id,
            home_away: home_away.to_string(),
            school: school.to_string(),
            name: name.to_string(),
            stat: stat.to_string(),
        }
    }

    fn stat(category: &str, stat: &str) -> StatEntry {
        StatEntry {
            category: category.to_string(),
            stat: stat.to_string(),
        }
    }

    #[test]
    fn empty_rows_give_empty_list() {
        assert!(group_team_stats(vec![]).is_empty());
    }

    #[test]
    fn groups_two_teams_of_one_game() {
        let grouped = group_team_stats(vec![
            row(1, "home", "A", "yards", "300"),
            row(1, "away", "B", "yards", "250"),
        ]);

        assert_eq!(
            grouped,
            vec![GameTeamStats {
                id: 1,
                teams: vec![
                    TeamGameStats {
                        school: "A".to_string(),
                        home_away: "home".to_string(),
                        stats: vec![stat("yards", "300")],
                    },
                    TeamGameStats {
                        school: "B".to_string(),
                        home_away: "away".to_string(),
                        stats: vec![stat("yards", "250")],
                    },
                ],
            }]
        );

        let json = serde_json::to_value(&grouped).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "teams": [
                    {"school": "A", "homeAway": "home", "stats": [{"category": "yards", "stat": "300"}]},
                    {"school": "B", "homeAway": "away", "stats": [{"category": "yards", "stat": "250"}]}
                ]
            }])
        );
    }

    #[test]
    fn keeps_first_occurrence_order_across_interleaved_rows() {
        let grouped = group_team_stats(vec![
            row(9, "away", "Z", "firstDowns", "20"),
            row(2, "home", "M", "firstDowns", "18"),
            row(9, "home", "A", "firstDowns", "15"),
            row(9, "away", "Z", "totalYards", "410"),
            row(2, "away", "N", "firstDowns", "12"),
        ]);

        let ids: Vec<i64> = grouped.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![9, 2]);

        let schools: Vec<&str> = grouped[0].teams.iter().map(|t| t.school.as_str()).collect();
        assert_eq!(schools, vec!["Z", "A"]);
        assert_eq!(
            grouped[0].teams[0].stats,
            vec![stat("firstDowns", "20"), stat("totalYards", "410")]
        );
    }

    #[test]
    fn home_away_comes_from_first_row_of_team() {
        let grouped = group_team_stats(vec![
            row(1, "home", "A", "yards", "300"),
            row(1, "away", "A", "turnovers", "2"),
        ]);

        assert_eq!(grouped[0].teams.len(), 1);
        assert_eq!(grouped[0].teams[0].home_away, "home");
        assert_eq!(grouped[0].teams[0].stats.len(), 2);
    }

    #[test]
    fn regrouping_same_rows_is_identical() {
        let rows = vec![
            row(3, "home", "A", "yards", "300"),
            row(4, "away", "C", "yards", "100"),
            row(3, "away", "B", "yards", "250"),
        ];

        assert_eq!(group_team_stats(rows.clone()), group_team_stats(rows));
    }
}
