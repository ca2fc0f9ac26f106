use crate::competitor::CompetitorId;
use crate::storage::StoreError;
use std::fmt;

#[derive(Debug)]
pub enum LeagueError {
    /// Competitor set the schedule cannot be built from: empty, single, odd sized or with repeated names.
    InvalidConfiguration(String),
    /// The persistence collaborator failed or could not be reached.
    StoreUnavailable(StoreError),
    /// A fixture references a competitor missing from the ledger.
    UnknownCompetitor(CompetitorId),
}

impl fmt::Display for LeagueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueError::InvalidConfiguration(msg) => write!(f, "invalid league configuration: {}", msg),
            LeagueError::StoreUnavailable(err) => write!(f, "league store unavailable: {}", err),
            LeagueError::UnknownCompetitor(id) => write!(f, "unknown competitor: {}", id),
        }
    }
}

impl std::error::Error for LeagueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeagueError::StoreUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for LeagueError {
    fn from(err: StoreError) -> Self {
        LeagueError::StoreUnavailable(err)
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;
