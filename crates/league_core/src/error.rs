use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("No league has remaining capacity for team {team_id}")]
    NoAvailableLeague { team_id: u32 },

    #[error("No valid schedule for {league} with {matches_per_team} matches per team")]
    ScheduleInfeasible { league: String, matches_per_team: usize },

    #[error("Gave up after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl DrawError {
    /// Whether a trial hitting this error should be discarded and retried.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DrawError::NoAvailableLeague { .. } => true,
            DrawError::ScheduleInfeasible { .. } => true,
            DrawError::AttemptsExhausted { .. } => false,
            DrawError::InvalidConfig(_) => false,
            DrawError::ConfigParse(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_failures_are_recoverable() {
        assert!(DrawError::NoAvailableLeague { team_id: 3 }.is_recoverable());
        assert!(DrawError::ScheduleInfeasible {
            league: "League 1".to_string(),
            matches_per_team: 3
        }
        .is_recoverable());
        assert!(!DrawError::AttemptsExhausted { attempts: 10 }.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = DrawError::ScheduleInfeasible { league: "League 2".to_string(), matches_per_team: 3 };
        assert_eq!(err.to_string(), "No valid schedule for League 2 with 3 matches per team");
    }
}
