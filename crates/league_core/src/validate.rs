//! Invariant checks for a finished draw.

use crate::config::TournamentConfig;
use crate::models::{League, TeamCatalog};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
    LeagueCount { expected: usize, found: usize },
    Unassigned { team_id: u32 },
    AssignedTwice { team_id: u32 },
    UnknownTeam { league: String, team_id: u32 },
    WrongSize { league: String, expected: usize, found: usize },
    WrongMatchCount { league: String, team_id: u32, expected: usize, found: usize },
    SameRegion { league: String, pair: (u32, u32) },
    DuplicateMatch { league: String, pair: (u32, u32) },
    OutsideLeague { league: String, pair: (u32, u32) },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::LeagueCount { expected, found } => {
                write!(f, "expected {} leagues, found {}", expected, found)
            }
            Violation::Unassigned { team_id } => write!(f, "team {} is in no league", team_id),
            Violation::AssignedTwice { team_id } => {
                write!(f, "team {} is in more than one league", team_id)
            }
            Violation::UnknownTeam { league, team_id } => {
                write!(f, "{}: team {} is not in the catalog", league, team_id)
            }
            Violation::WrongSize { league, expected, found } => {
                write!(f, "{}: expected {} teams, found {}", league, expected, found)
            }
            Violation::WrongMatchCount { league, team_id, expected, found } => write!(
                f,
                "{}: team {} plays {} matches, expected {}",
                league, team_id, found, expected
            ),
            Violation::SameRegion { league, pair } => {
                write!(f, "{}: {} vs {} share a region", league, pair.0, pair.1)
            }
            Violation::DuplicateMatch { league, pair } => {
                write!(f, "{}: {} vs {} scheduled twice", league, pair.0, pair.1)
            }
            Violation::OutsideLeague { league, pair } => {
                write!(f, "{}: {} vs {} involves a team from another league", league, pair.0, pair.1)
            }
        }
    }
}

/// Every broken invariant of `leagues`. Empty means the draw is acceptable.
pub fn check(catalog: &TeamCatalog, leagues: &[League<'_>], config: &TournamentConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if leagues.len() != config.league_sizes.len() {
        violations.push(Violation::LeagueCount {
            expected: config.league_sizes.len(),
            found: leagues.len(),
        });
    }

    // membership
    let mut placements: HashMap<u32, usize> = HashMap::new();
    for league in leagues {
        for team in &league.teams {
            if catalog.get(team.id).is_none() {
                violations.push(Violation::UnknownTeam { league: league.name.clone(), team_id: team.id });
            }
            *placements.entry(team.id).or_insert(0) += 1;
        }
    }
    for team in catalog.teams() {
        match placements.get(&team.id).copied().unwrap_or(0) {
            0 => violations.push(Violation::Unassigned { team_id: team.id }),
            1 => {}
            _ => violations.push(Violation::AssignedTwice { team_id: team.id }),
        }
    }

    for (league, &expected) in leagues.iter().zip(&config.league_sizes) {
        if league.size() != expected {
            violations.push(Violation::WrongSize {
                league: league.name.clone(),
                expected,
                found: league.size(),
            });
        }
    }

    for league in leagues {
        check_matches(league, config.matches_per_team, &mut violations);
    }

    violations
}

fn check_matches(league: &League<'_>, matches_per_team: usize, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();

    for m in &league.matches {
        let pair = m.key();
        if !m.is_cross_region() {
            violations.push(Violation::SameRegion { league: league.name.clone(), pair });
        }
        if !seen.insert(pair) {
            violations.push(Violation::DuplicateMatch { league: league.name.clone(), pair });
        }
        if !league.contains(pair.0) || !league.contains(pair.1) {
            violations.push(Violation::OutsideLeague { league: league.name.clone(), pair });
        }
    }

    for team in &league.teams {
        let found = league.matches_for(team.id);
        if found != matches_per_team {
            violations.push(Violation::WrongMatchCount {
                league: league.name.clone(),
                team_id: team.id,
                expected: matches_per_team,
                found,
            });
        }
    }
}
