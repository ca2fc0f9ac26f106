use crate::r#match::MatchOutcome;
use serde::{Deserialize, Serialize};

pub type CompetitorId = u32;

pub const POINTS_FOR_WIN: u16 = 3;
pub const POINTS_FOR_DRAW: u16 = 1;

/// Name and strength used to register a competitor before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorSpec {
    pub name: String,
    pub strength: u8,
}

impl CompetitorSpec {
    pub fn new(name: impl Into<String>, strength: u8) -> Self {
        CompetitorSpec {
            name: name.into(),
            strength,
        }
    }
}

/// A league competitor together with its cumulative standings.
///
/// Standings only move through [`Competitor::record_match`]; `goal_difference`
/// is derived and recomputed on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub strength: u8,

    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u16,
}

impl Competitor {
    pub fn new(id: CompetitorId, name: impl Into<String>, strength: u8) -> Self {
        Competitor {
            id,
            name: name.into(),
            strength,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    pub fn from_spec(id: CompetitorId, spec: &CompetitorSpec) -> Self {
        Competitor::new(id, spec.name.clone(), spec.strength)
    }

    pub fn record_match(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as i32;
        self.goals_against += conceded as i32;

        match MatchOutcome::from_goals(scored, conceded) {
            MatchOutcome::HomeWin => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            MatchOutcome::AwayWin => self.lost += 1,
            MatchOutcome::Draw => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }

        self.goal_difference = self.goals_for - self.goals_against;
    }
}
