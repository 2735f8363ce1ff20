use crate::config::TournamentConfig;
use serde::{Deserialize, Serialize};

/// A participating team. Immutable once the catalog has created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub region: String,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self { id, name: name.into(), region: region.into() }
    }

    pub fn shares_region(&self, other: &Team) -> bool {
        self.region == other.region
    }
}

/// Owner of every team in a draw. Leagues and matches borrow from it.
#[derive(Debug, Clone, Default)]
pub struct TeamCatalog {
    teams: Vec<Team>,
}

impl TeamCatalog {
    /// Build the catalog from region quotas.
    ///
    /// Ids run from 1 across all regions in quota order, names are
    /// `Team <region>-<n>` with `n` counting from 1 inside the region.
    pub fn from_config(config: &TournamentConfig) -> Self {
        let mut teams = Vec::with_capacity(config.total_teams());
        let mut next_id = 1u32;

        for quota in &config.regions {
            for n in 1..=quota.teams {
                teams.push(Team::new(
                    next_id,
                    format!("Team {}-{}", quota.region, n),
                    quota.region.clone(),
                ));
                next_id += 1;
            }
        }

        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegionQuota;

    #[test]
    fn test_catalog_from_default_config() {
        let catalog = TeamCatalog::from_config(&TournamentConfig::default());
        assert_eq!(catalog.len(), 18);

        let first = &catalog.teams()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Team A-1");
        assert_eq!(first.region, "A");

        let last = &catalog.teams()[17];
        assert_eq!(last.id, 18);
        assert_eq!(last.name, "Team G-5");
    }

    #[test]
    fn test_catalog_ids_are_sequential_and_unique() {
        let catalog = TeamCatalog::from_config(&TournamentConfig::default());
        let ids: Vec<u32> = catalog.teams().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_catalog_follows_quota_order() {
        let config = TournamentConfig {
            regions: vec![RegionQuota::new("Z", 1), RegionQuota::new("Y", 2)],
            league_sizes: vec![3],
            matches_per_team: 0,
        };
        let catalog = TeamCatalog::from_config(&config);
        let names: Vec<&str> = catalog.teams().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Team Z-1", "Team Y-1", "Team Y-2"]);
        assert_eq!(catalog.get(2).map(|t| t.region.as_str()), Some("Y"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_shares_region() {
        let a = Team::new(1, "Team A-1", "A");
        let b = Team::new(2, "Team A-2", "A");
        let c = Team::new(3, "Team B-1", "B");
        assert!(a.shares_region(&b));
        assert!(!a.shares_region(&c));
    }
}
