//! Tournament configuration
//!
//! Region quotas, league capacities and the per-team match target fully
//! determine a draw. The built-in constants live in [`TournamentConfig::default`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of teams a single region contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionQuota {
    pub region: String,
    pub teams: usize,
}

impl RegionQuota {
    pub fn new(region: impl Into<String>, teams: usize) -> Self {
        Self { region: region.into(), teams }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TournamentConfig {
    /// Region quotas, in team id order
    #[validate(length(min = 1))]
    pub regions: Vec<RegionQuota>,
    /// Target size of each league, in league order
    #[validate(length(min = 1))]
    pub league_sizes: Vec<usize>,
    /// Exact number of distinct opponents every team must face
    pub matches_per_team: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            regions: vec![
                RegionQuota::new("A", 2),
                RegionQuota::new("B", 1),
                RegionQuota::new("C", 2),
                RegionQuota::new("D", 6),
                RegionQuota::new("E", 1),
                RegionQuota::new("F", 1),
                RegionQuota::new("G", 5),
            ],
            league_sizes: vec![6, 4, 4, 4],
            matches_per_team: 3,
        }
    }
}

impl TournamentConfig {
    /// Parse and shape-check a JSON configuration.
    ///
    /// Capacity consistency is not enforced here; see [`Self::capacity_mismatch`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TournamentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn total_teams(&self) -> usize {
        self.regions.iter().map(|q| q.teams).sum()
    }

    pub fn total_capacity(&self) -> usize {
        self.league_sizes.iter().sum()
    }

    /// `(teams, capacity)` when the two totals disagree.
    ///
    /// A mismatch makes every partition attempt fail, so the trial loop
    /// would never terminate without a retry cap.
    pub fn capacity_mismatch(&self) -> Option<(usize, usize)> {
        let teams = self.total_teams();
        let capacity = self.total_capacity();
        (teams != capacity).then_some((teams, capacity))
    }
}
