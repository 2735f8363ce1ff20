use super::team::Team;
use serde::Serialize;

/// Unordered pairing of two teams, stored with the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Match<'a> {
    pub first: &'a Team,
    pub second: &'a Team,
}

impl<'a> Match<'a> {
    pub fn new(a: &'a Team, b: &'a Team) -> Self {
        if a.id <= b.id {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn key(&self) -> (u32, u32) {
        (self.first.id, self.second.id)
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.first.id == team_id || self.second.id == team_id
    }

    pub fn is_cross_region(&self) -> bool {
        !self.first.shares_region(self.second)
    }
}

/// A fixed-capacity group of teams that only play each other.
#[derive(Debug, Clone, Serialize)]
pub struct League<'a> {
    pub name: String,
    pub teams: Vec<&'a Team>,
    pub matches: Vec<Match<'a>>,
}

impl<'a> League<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), teams: Vec::new(), matches: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.teams.len()
    }

    /// Teams already placed here that come from `region`.
    pub fn region_count(&self, region: &str) -> usize {
        self.teams.iter().filter(|t| t.region == region).count()
    }

    pub fn contains(&self, team_id: u32) -> bool {
        self.teams.iter().any(|t| t.id == team_id)
    }

    pub fn matches_for(&self, team_id: u32) -> usize {
        self.matches.iter().filter(|m| m.involves(team_id)).count()
    }
}
