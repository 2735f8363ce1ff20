//! # league_core - Region-Balanced League Draw Engine
//!
//! Splits a fixed set of regional teams into fixed-size leagues and gives
//! every team an exact number of cross-region opponents inside its league.
//!
//! ## Features
//! - Greedy region-spreading league partitioner with random tie-breaks
//! - Exhaustive include/exclude match search, first solution wins
//! - Whole-draw retry loop, reproducible from a seed
//! - Invariant checker and sorted text/JSON reports

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod validate;

pub use config::{RegionQuota, TournamentConfig};
pub use engine::{
    partition, schedule_league, NoopObserver, SearchStats, TrialObserver, TrialOutcome,
    TrialRunner,
};
pub use error::{DrawError, Result};
pub use models::{League, Match, Team, TeamCatalog};
pub use report::{render_text, DrawReport};
pub use validate::Violation;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
