use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    /// Outcome seen from the side that scored `first`.
    pub fn from_goals(first: u8, second: u8) -> Self {
        if first > second {
            MatchOutcome::HomeWin
        } else if second > first {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home_goals: u8,
    pub away_goals: u8,
}

impl MatchScore {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        MatchScore {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.home_goals, self.away_goals)
    }
}
