//! Team and league data containers

pub mod league;
pub mod team;

pub use league::{League, Match};
pub use team::{Team, TeamCatalog};
