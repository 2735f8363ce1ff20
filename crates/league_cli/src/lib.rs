//! League Draw CLI library
//!
//! Config file loading, console narration of the trial loop and the JSON
//! envelope printed by `league_draw run --json`.

use anyhow::{Context, Result};
use league_core::engine::SearchStats;
use league_core::validate::{self, Violation};
use league_core::{
    render_text, DrawError, DrawReport, League, TeamCatalog, TournamentConfig, TrialObserver,
    TrialRunner,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Load a JSON config, or the built-in one when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<TournamentConfig> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            TournamentConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => TournamentConfig::default(),
    };

    if let Some((teams, capacity)) = config.capacity_mismatch() {
        tracing::warn!(
            teams,
            capacity,
            "team count does not match total league capacity; every attempt will fail"
        );
    }

    Ok(config)
}

/// Prints trial progress as plain lines.
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // narration is best effort
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write> TrialObserver for ConsoleNarrator<W> {
    fn attempt_started(&mut self, attempt: u64) {
        self.line(format_args!("\n--- Attempt {} ---", attempt));
    }

    fn partition_started(&mut self) {
        self.line(format_args!("Dividing teams into leagues..."));
    }

    fn partition_failed(&mut self, error: &DrawError) {
        self.line(format_args!("League division failed: {}. Retrying.", error));
    }

    fn schedule_started(&mut self, league: &League<'_>) {
        self.line(format_args!("Building matches for {}...", league.name));
    }

    fn schedule_succeeded(&mut self, league: &League<'_>, stats: &SearchStats) {
        tracing::debug!(
            league = %league.name,
            candidates = stats.candidates,
            nodes = stats.nodes_visited,
            "league scheduled"
        );
    }

    fn schedule_failed(&mut self, league: &League<'_>) {
        self.line(format_args!("No valid matches found for {}.", league.name));
    }

    fn attempt_discarded(&mut self, _attempt: u64) {
        self.line(format_args!("No valid combination this time, starting over from league division."));
    }

    fn draw_accepted(&mut self, attempts: u64, _leagues: &[League<'_>]) {
        self.line(format_args!("\nFound a valid draw after {} attempt(s)!", attempts));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    pub seed: u64,
    /// Opt-in retry cap; `None` retries forever
    pub max_attempts: Option<u64>,
}

/// Everything the binary prints about an accepted draw.
#[derive(Debug, Clone)]
pub struct DrawSummary {
    pub seed: u64,
    pub text: String,
    pub report: DrawReport,
    pub violations: Vec<Violation>,
}

/// Run the trial loop to completion and render the result.
pub fn run_draw<O: TrialObserver + ?Sized>(
    config: &TournamentConfig,
    options: &DrawOptions,
    observer: &mut O,
) -> Result<DrawSummary> {
    let catalog = TeamCatalog::from_config(config);
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);

    let mut runner = TrialRunner::new(config);
    if let Some(max) = options.max_attempts {
        runner = runner.with_max_attempts(max);
    }

    tracing::info!(seed = options.seed, teams = catalog.len(), "starting draw");
    let outcome = runner.run_observed(&catalog, &mut rng, observer).context("Draw failed")?;

    Ok(DrawSummary {
        seed: options.seed,
        text: render_text(&outcome.leagues),
        report: DrawReport::new(&outcome),
        violations: validate::check(&catalog, &outcome.leagues, config),
    })
}

/// JSON document printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct DrawEnvelope<'a> {
    /// Seed that reproduces this draw
    pub seed: u64,
    /// Generation time (RFC3339)
    pub generated_at: String,
    pub config: &'a TournamentConfig,
    #[serde(flatten)]
    pub report: &'a DrawReport,
}

impl<'a> DrawEnvelope<'a> {
    pub fn new(summary: &'a DrawSummary, config: &'a TournamentConfig) -> Self {
        Self {
            seed: summary.seed,
            generated_at: chrono::Utc::now().to_rfc3339(),
            config,
            report: &summary.report,
        }
    }
}
