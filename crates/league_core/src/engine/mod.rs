//! Draw engine: partition, schedule, retry

pub mod partition;
pub mod schedule;
pub mod trial;

pub use partition::{league_name, partition};
pub use schedule::{candidate_pairs, find_schedule, schedule_league, SearchStats};
pub use trial::{NoopObserver, TrialObserver, TrialOutcome, TrialRunner};
