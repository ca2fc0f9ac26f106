use crate::league::{Fixture, LeagueTable};
use serde::Serialize;

/// Fixtures played during one week advance, as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekResult {
    pub week: u16,
    pub fixtures: Vec<Fixture>,
}

impl WeekResult {
    pub fn new(week: u16, fixtures: Vec<Fixture>) -> Self {
        WeekResult { week, fixtures }
    }
}

/// Which played fixtures to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultScope {
    /// Only the most recently played week.
    #[default]
    CurrentWeek,
    All,
}

/// A played fixture with competitor names resolved, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResultView {
    pub week: u16,
    pub home_name: String,
    pub away_name: String,
    pub home_goals: u8,
    pub away_goals: u8,
}

impl MatchResultView {
    pub fn from_fixture(fixture: &Fixture, table: &LeagueTable) -> Option<Self> {
        let score = fixture.result?;

        Some(MatchResultView {
            week: fixture.week,
            home_name: table.name_of(fixture.home_id).to_string(),
            away_name: table.name_of(fixture.away_id).to_string(),
            home_goals: score.home_goals,
            away_goals: score.away_goals,
        })
    }
}
