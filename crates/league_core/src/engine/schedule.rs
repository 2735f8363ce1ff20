//! Match scheduler
//!
//! Builds a league's match list so that every team meets exactly
//! `matches_per_team` distinct opponents, none from its own region.
//!
//! The search walks a shuffled list of cross-region candidate pairs and, for
//! each pair, first tries including it (when both teams still need matches)
//! and then tries skipping it. The first complete assignment wins. There is
//! no pruning beyond the per-team ceiling, so an infeasible league costs a
//! full walk of the include/exclude tree before it is reported.

use crate::error::{DrawError, Result};
use crate::models::{League, Match, Team};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// Counters from one scheduling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Cross-region pairs available to the search
    pub candidates: usize,
    /// Search nodes entered, including the root
    pub nodes_visited: u64,
}

/// Every cross-region pair among `teams`, lower id first, in input order.
pub fn candidate_pairs<'a>(teams: &[&'a Team]) -> Vec<Match<'a>> {
    let mut pairs = Vec::new();
    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            if !a.shares_region(b) {
                pairs.push(Match::new(*a, *b));
            }
        }
    }
    pairs
}

/// Depth-first include/exclude search over a fixed candidate order.
struct Search<'s, 'a> {
    candidates: &'s [Match<'a>],
    target: usize,
    counts: HashMap<u32, usize>,
    /// Teams whose count has reached `target`
    satisfied: usize,
    team_count: usize,
    chosen: Vec<Match<'a>>,
    nodes_visited: u64,
}

impl<'s, 'a> Search<'s, 'a> {
    fn new(teams: &[&'a Team], candidates: &'s [Match<'a>], target: usize) -> Self {
        Self {
            candidates,
            target,
            counts: teams.iter().map(|t| (t.id, 0)).collect(),
            satisfied: if target == 0 { teams.len() } else { 0 },
            team_count: teams.len(),
            chosen: Vec::new(),
            nodes_visited: 0,
        }
    }

    fn count(&self, team_id: u32) -> usize {
        self.counts.get(&team_id).copied().unwrap_or(0)
    }

    fn can_take(&self, pair: &Match<'a>) -> bool {
        self.count(pair.first.id) < self.target && self.count(pair.second.id) < self.target
    }

    fn bump(&mut self, team_id: u32) {
        let count = self.counts.entry(team_id).or_insert(0);
        *count += 1;
        if *count == self.target {
            self.satisfied += 1;
        }
    }

    fn unbump(&mut self, team_id: u32) {
        let count = self.counts.entry(team_id).or_insert(0);
        if *count == self.target {
            self.satisfied -= 1;
        }
        *count -= 1;
    }

    fn commit(&mut self, pair: Match<'a>) {
        self.bump(pair.first.id);
        self.bump(pair.second.id);
        self.chosen.push(pair);
    }

    fn rollback(&mut self, pair: Match<'a>) {
        self.chosen.pop();
        self.unbump(pair.second.id);
        self.unbump(pair.first.id);
    }

    fn explore(&mut self, index: usize) -> bool {
        self.nodes_visited += 1;

        if self.satisfied == self.team_count {
            return true;
        }

        let Some(&pair) = self.candidates.get(index) else {
            return false;
        };

        if self.can_take(&pair) {
            self.commit(pair);
            if self.explore(index + 1) {
                return true;
            }
            self.rollback(pair);
        }

        self.explore(index + 1)
    }
}

/// Search for a match list over `teams`.
///
/// Returns the first list found, or `None` once every include/exclude branch
/// has been exhausted.
pub fn find_schedule<'a, R: Rng + ?Sized>(
    teams: &[&'a Team],
    matches_per_team: usize,
    rng: &mut R,
) -> (Option<Vec<Match<'a>>>, SearchStats) {
    if matches_per_team == 0 {
        return (Some(Vec::new()), SearchStats::default());
    }

    let mut candidates = candidate_pairs(teams);
    candidates.shuffle(rng);

    let mut search = Search::new(teams, &candidates, matches_per_team);
    let found = search.explore(0);
    let stats = SearchStats { candidates: candidates.len(), nodes_visited: search.nodes_visited };

    (found.then_some(search.chosen), stats)
}

/// Schedule `league` in place.
///
/// On success `league.matches` is replaced with the new list. On failure the
/// league is left exactly as it was.
pub fn schedule_league<'a, R: Rng + ?Sized>(
    league: &mut League<'a>,
    matches_per_team: usize,
    rng: &mut R,
) -> Result<SearchStats> {
    let (found, stats) = find_schedule(&league.teams, matches_per_team, rng);

    log::debug!(
        "{}: {} candidates, {} nodes visited",
        league.name,
        stats.candidates,
        stats.nodes_visited
    );

    match found {
        Some(matches) => {
            league.matches = matches;
            Ok(stats)
        }
        None => Err(DrawError::ScheduleInfeasible { league: league.name.clone(), matches_per_team }),
    }
}
