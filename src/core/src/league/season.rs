use serde::Serialize;
use std::fmt;

/// Progress of a season through its schedule.
///
/// `Complete` is terminal: advancing a complete season does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonState {
    NotStarted,
    InProgress,
    Complete,
}

impl SeasonState {
    pub fn from_progress(current_week: usize, week_count: usize) -> Self {
        if current_week >= week_count {
            SeasonState::Complete
        } else if current_week == 0 {
            SeasonState::NotStarted
        } else {
            SeasonState::InProgress
        }
    }
}

impl fmt::Display for SeasonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonState::NotStarted => write!(f, "not started"),
            SeasonState::InProgress => write!(f, "in progress"),
            SeasonState::Complete => write!(f, "complete"),
        }
    }
}
