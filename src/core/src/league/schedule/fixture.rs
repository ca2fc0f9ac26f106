use crate::competitor::CompetitorId;
use crate::r#match::MatchScore;
use serde::{Deserialize, Serialize};

pub type FixtureId = u32;

/// Natural key of a fixture: the pairing and the (1-based) week it is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureKey {
    pub home_id: CompetitorId,
    pub away_id: CompetitorId,
    pub week: u16,
}

impl FixtureKey {
    pub fn new(home_id: CompetitorId, away_id: CompetitorId, week: u16) -> Self {
        FixtureKey {
            home_id,
            away_id,
            week,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home_id: CompetitorId,
    pub away_id: CompetitorId,
    pub week: u16,
    pub result: Option<MatchScore>,
}

impl Fixture {
    /// Unsaved fixture; the store assigns the id.
    pub fn new(home_id: CompetitorId, away_id: CompetitorId, week: u16) -> Self {
        Fixture {
            id: 0,
            home_id,
            away_id,
            week,
            result: None,
        }
    }

    pub fn key(&self) -> FixtureKey {
        FixtureKey::new(self.home_id, self.away_id, self.week)
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn involves(&self, competitor_id: CompetitorId) -> bool {
        self.home_id == competitor_id || self.away_id == competitor_id
    }
}
