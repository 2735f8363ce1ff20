//! Display views of a finished draw
//!
//! Teams are listed by id and matches by `(first id, second id)`, so the
//! same leagues always render the same way.

use crate::engine::TrialOutcome;
use crate::models::{League, Match, Team};
use serde::Serialize;
use std::fmt::Write;

/// A league with teams and matches in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueView<'a> {
    pub name: &'a str,
    pub teams: Vec<&'a Team>,
    pub matches: Vec<Match<'a>>,
}

impl<'a> LeagueView<'a> {
    pub fn new(league: &'a League<'a>) -> Self {
        let mut teams = league.teams.clone();
        teams.sort_by_key(|t| t.id);

        let mut matches = league.matches.clone();
        matches.sort_by_key(|m| m.key());

        Self { name: &league.name, teams, matches }
    }
}

/// Human-readable report of every league.
pub fn render_text(leagues: &[League<'_>]) -> String {
    let blocks: Vec<String> = leagues.iter().map(|l| render_league(&LeagueView::new(l))).collect();
    blocks.join("\n\n")
}

fn render_league(view: &LeagueView<'_>) -> String {
    let mut out = String::new();
    let _ = write!(out, "[{}] ({} teams)\n  teams:", view.name, view.teams.len());
    for team in &view.teams {
        let _ = write!(out, "\n    - {} (region: {})", team.name, team.region);
    }
    out.push_str("\n  matches:");
    for m in &view.matches {
        let _ = write!(out, "\n    - {} vs {}", m.first.name, m.second.name);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamEntry {
    pub id: u32,
    pub name: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueEntry {
    pub name: String,
    pub teams: Vec<TeamEntry>,
    /// Id pairs, lower id first
    pub matches: Vec<(u32, u32)>,
}

/// Serializable form of an accepted draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawReport {
    pub attempts: u64,
    pub leagues: Vec<LeagueEntry>,
}

impl DrawReport {
    pub fn new(outcome: &TrialOutcome<'_>) -> Self {
        Self::from_leagues(outcome.attempts, &outcome.leagues)
    }

    pub fn from_leagues(attempts: u64, leagues: &[League<'_>]) -> Self {
        let leagues = leagues
            .iter()
            .map(|league| {
                let view = LeagueView::new(league);
                LeagueEntry {
                    name: view.name.to_string(),
                    teams: view
                        .teams
                        .iter()
                        .map(|t| TeamEntry { id: t.id, name: t.name.clone(), region: t.region.clone() })
                        .collect(),
                    matches: view.matches.iter().map(|m| m.key()).collect(),
                }
            })
            .collect();

        Self { attempts, leagues }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RegionQuota, TournamentConfig};
    use crate::models::TeamCatalog;

    fn four_region_catalog() -> TeamCatalog {
        TeamCatalog::from_config(&TournamentConfig {
            regions: vec![
                RegionQuota::new("A", 1),
                RegionQuota::new("B", 1),
                RegionQuota::new("C", 1),
                RegionQuota::new("D", 1),
            ],
            league_sizes: vec![4],
            matches_per_team: 1,
        })
    }

    fn shuffled_league(catalog: &TeamCatalog) -> League<'_> {
        let t = catalog.teams();
        let mut league = League::new("League 1");
        league.teams.extend([&t[3], &t[0], &t[2], &t[1]]);
        league.matches.push(Match::new(&t[3], &t[1]));
        league.matches.push(Match::new(&t[2], &t[0]));
        league
    }

    #[test]
    fn test_view_sorts_teams_and_matches() {
        let catalog = four_region_catalog();
        let league = shuffled_league(&catalog);

        let view = LeagueView::new(&league);

        let ids: Vec<u32> = view.teams.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let keys: Vec<(u32, u32)> = view.matches.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec![(1, 3), (2, 4)]);
        // the league itself keeps its insertion order
        assert_eq!(league.teams[0].id, 4);
    }

    #[test]
    fn test_render_text() {
        let catalog = four_region_catalog();
        let league = shuffled_league(&catalog);

        insta::assert_snapshot!(render_text(&[league]), @r"
[League 1] (4 teams)
  teams:
    - Team A-1 (region: A)
    - Team B-1 (region: B)
    - Team C-1 (region: C)
    - Team D-1 (region: D)
  matches:
    - Team A-1 vs Team C-1
    - Team B-1 vs Team D-1
");
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = four_region_catalog();
        let leagues = vec![shuffled_league(&catalog), League::new("League 2")];

        let first = render_text(&leagues);
        let second = render_text(&leagues);

        assert_eq!(first, second);
        assert!(first.contains("\n\n[League 2] (0 teams)\n  teams:\n  matches:"));
    }

    #[test]
    fn test_draw_report_json() {
        let catalog = four_region_catalog();
        let league = shuffled_league(&catalog);

        let report = DrawReport::from_leagues(3, &[league]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["attempts"], 3);
        assert_eq!(json["leagues"][0]["name"], "League 1");
        assert_eq!(json["leagues"][0]["teams"][0]["name"], "Team A-1");
        assert_eq!(json["leagues"][0]["matches"], serde_json::json!([[1, 3], [2, 4]]));
    }
}
