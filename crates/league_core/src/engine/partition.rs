//! League partitioner
//!
//! Greedy, single-pass placement of teams into fixed-capacity leagues that
//! keeps same-region teams apart where it can. Placed teams are never moved,
//! so the result is only locally balanced; the match scheduler still enforces
//! the cross-region rule on its own.

use crate::error::{DrawError, Result};
use crate::models::{League, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Display name of the league at `index` (zero based).
pub fn league_name(index: usize) -> String {
    format!("League {}", index + 1)
}

/// Assign every team to one of `league_sizes.len()` leagues.
///
/// Teams are visited in a fresh random order. Each goes to an open league
/// holding the fewest teams of its region, with ties broken uniformly at
/// random. Fails only when a team finds every league full, which means the
/// league sizes do not add up to the team count.
pub fn partition<'a, R: Rng + ?Sized>(
    teams: &'a [Team],
    league_sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<League<'a>>> {
    let mut leagues: Vec<League<'a>> =
        (0..league_sizes.len()).map(|i| League::new(league_name(i))).collect();

    let mut order: Vec<&'a Team> = teams.iter().collect();
    order.shuffle(rng);

    for team in order {
        let available: Vec<usize> = leagues
            .iter()
            .zip(league_sizes)
            .enumerate()
            .filter(|(_, (league, size))| league.size() < **size)
            .map(|(i, _)| i)
            .collect();

        let Some(min_count) =
            available.iter().map(|&i| leagues[i].region_count(&team.region)).min()
        else {
            log::debug!("No league has room for {} (id {})", team.name, team.id);
            return Err(DrawError::NoAvailableLeague { team_id: team.id });
        };

        let best: Vec<usize> = available
            .into_iter()
            .filter(|&i| leagues[i].region_count(&team.region) == min_count)
            .collect();

        // non-empty: the league that set `min_count` is always in it
        let chosen = best[rng.gen_range(0..best.len())];
        leagues[chosen].teams.push(team);
    }

    Ok(leagues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RegionQuota, TournamentConfig};
    use crate::models::TeamCatalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn default_catalog() -> TeamCatalog {
        TeamCatalog::from_config(&TournamentConfig::default())
    }

    #[test]
    fn test_partition_fills_every_league_to_size() {
        let catalog = default_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let leagues = partition(catalog.teams(), &[6, 4, 4, 4], &mut rng).unwrap();

        let sizes: Vec<usize> = leagues.iter().map(|l| l.size()).collect();
        assert_eq!(sizes, vec![6, 4, 4, 4]);
        let names: Vec<&str> = leagues.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["League 1", "League 2", "League 3", "League 4"]);
    }

    #[test]
    fn test_partition_places_each_team_once() {
        let catalog = default_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let leagues = partition(catalog.teams(), &[6, 4, 4, 4], &mut rng).unwrap();

        let mut seen = HashSet::new();
        for league in &leagues {
            assert!(league.matches.is_empty());
            for team in &league.teams {
                assert!(seen.insert(team.id), "team {} placed twice", team.id);
            }
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_partition_spreads_single_region_evenly() {
        // With spare room everywhere, a region never doubles up before every league has one
        let config = TournamentConfig {
            regions: vec![RegionQuota::new("D", 3)],
            league_sizes: vec![3, 3, 3],
            matches_per_team: 0,
        };
        let catalog = TeamCatalog::from_config(&config);

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let leagues = partition(catalog.teams(), &config.league_sizes, &mut rng).unwrap();
            for league in &leagues {
                assert_eq!(league.region_count("D"), 1);
            }
        }
    }

    #[test]
    fn test_partition_with_too_little_capacity_fails() {
        let catalog = default_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = partition(catalog.teams(), &[6, 4, 4], &mut rng).unwrap_err();
        assert!(matches!(err, DrawError::NoAvailableLeague { .. }));
    }

    #[test]
    fn test_partition_with_no_leagues_fails() {
        let catalog = default_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(partition(catalog.teams(), &[], &mut rng).is_err());
    }

    #[test]
    fn test_partition_tie_break_is_not_biased_to_first_league() {
        // One team, four empty leagues: every league must win the tie sometimes
        let teams = vec![Team::new(1, "Team A-1", "A")];
        let mut hits = [0usize; 4];
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..400 {
            let leagues = partition(&teams, &[1, 1, 1, 1], &mut rng).unwrap();
            let idx = leagues.iter().position(|l| l.size() == 1).unwrap();
            hits[idx] += 1;
        }

        for (i, &count) in hits.iter().enumerate() {
            assert!(count > 50, "league {} chosen only {} times", i + 1, count);
        }
    }

    #[test]
    fn test_partition_varies_between_draws() {
        let catalog = default_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let layout = |leagues: &[League]| -> Vec<Vec<u32>> {
            leagues
                .iter()
                .map(|l| {
                    let mut ids: Vec<u32> = l.teams.iter().map(|t| t.id).collect();
                    ids.sort_unstable();
                    ids
                })
                .collect()
        };

        let first = layout(&partition(catalog.teams(), &[6, 4, 4, 4], &mut rng).unwrap());
        let differs = (0..10).any(|_| {
            layout(&partition(catalog.teams(), &[6, 4, 4, 4], &mut rng).unwrap()) != first
        });
        assert!(differs);
    }
}
