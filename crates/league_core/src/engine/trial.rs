//! Trial loop
//!
//! A trial partitions every team and then schedules each league in order.
//! Any failure throws the whole trial away and starts over with a new
//! partition. Retries are unbounded unless a cap is installed explicitly.

use super::partition::partition;
use super::schedule::{schedule_league, SearchStats};
use crate::config::TournamentConfig;
use crate::error::{DrawError, Result};
use crate::models::{League, TeamCatalog};
use rand::Rng;

/// Progress hooks for the trial loop. Every method defaults to a no-op.
pub trait TrialObserver {
    fn attempt_started(&mut self, _attempt: u64) {}
    fn partition_started(&mut self) {}
    fn partition_failed(&mut self, _error: &DrawError) {}
    fn schedule_started(&mut self, _league: &League<'_>) {}
    fn schedule_succeeded(&mut self, _league: &League<'_>, _stats: &SearchStats) {}
    fn schedule_failed(&mut self, _league: &League<'_>) {}
    fn attempt_discarded(&mut self, _attempt: u64) {}
    fn draw_accepted(&mut self, _attempts: u64, _leagues: &[League<'_>]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}

/// An accepted draw.
#[derive(Debug, Clone)]
pub struct TrialOutcome<'a> {
    /// Attempts used, counting the successful one
    pub attempts: u64,
    pub leagues: Vec<League<'a>>,
}

#[derive(Debug, Clone)]
pub struct TrialRunner {
    league_sizes: Vec<usize>,
    matches_per_team: usize,
    max_attempts: Option<u64>,
}

impl TrialRunner {
    pub fn new(config: &TournamentConfig) -> Self {
        Self {
            league_sizes: config.league_sizes.clone(),
            matches_per_team: config.matches_per_team,
            max_attempts: None,
        }
    }

    /// Stop with [`DrawError::AttemptsExhausted`] after `max_attempts` failed trials.
    ///
    /// Without a cap, a configuration that can never succeed loops forever.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Run trials until one is accepted.
    pub fn run<'a, R: Rng + ?Sized>(
        &self,
        catalog: &'a TeamCatalog,
        rng: &mut R,
    ) -> Result<TrialOutcome<'a>> {
        self.run_observed(catalog, rng, &mut NoopObserver)
    }

    pub fn run_observed<'a, R: Rng + ?Sized, O: TrialObserver + ?Sized>(
        &self,
        catalog: &'a TeamCatalog,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<TrialOutcome<'a>> {
        let mut attempt = 0u64;

        loop {
            if let Some(max) = self.max_attempts {
                if attempt >= max {
                    log::warn!("Giving up after {} attempts", attempt);
                    return Err(DrawError::AttemptsExhausted { attempts: attempt });
                }
            }
            attempt += 1;
            observer.attempt_started(attempt);
            log::info!("Attempt {}", attempt);

            match self.try_once(catalog, rng, observer) {
                Ok(leagues) => {
                    log::info!("Draw accepted after {} attempts", attempt);
                    observer.draw_accepted(attempt, &leagues);
                    return Ok(TrialOutcome { attempts: attempt, leagues });
                }
                Err(e) if e.is_recoverable() => {
                    log::debug!("Attempt {} discarded: {}", attempt, e);
                    observer.attempt_discarded(attempt);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One trial: partition, then schedule leagues in order until one fails.
    fn try_once<'a, R: Rng + ?Sized, O: TrialObserver + ?Sized>(
        &self,
        catalog: &'a TeamCatalog,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Vec<League<'a>>> {
        observer.partition_started();
        let mut leagues = partition(catalog.teams(), &self.league_sizes, rng).inspect_err(|e| {
            observer.partition_failed(e);
        })?;

        for league in leagues.iter_mut() {
            observer.schedule_started(league);
            match schedule_league(league, self.matches_per_team, rng) {
                Ok(stats) => observer.schedule_succeeded(league, &stats),
                Err(e) => {
                    observer.schedule_failed(league);
                    return Err(e);
                }
            }
        }

        Ok(leagues)
    }
}
