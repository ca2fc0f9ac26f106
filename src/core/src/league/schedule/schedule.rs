use crate::league::Fixture;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWeek {
    /// 1-based week number.
    pub number: u16,
    pub fixtures: Vec<Fixture>,
}

impl ScheduleWeek {
    pub fn new(number: u16, fixtures: Vec<Fixture>) -> Self {
        ScheduleWeek { number, fixtures }
    }

    pub fn is_played(&self) -> bool {
        self.fixtures.iter().all(Fixture::is_played)
    }
}

/// Season fixture list partitioned into weeks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub weeks: Vec<ScheduleWeek>,
}

impl Schedule {
    pub fn new(weeks: Vec<ScheduleWeek>) -> Self {
        Schedule { weeks }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Week by 0-based index.
    pub fn week(&self, index: usize) -> Option<&ScheduleWeek> {
        self.weeks.get(index)
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.weeks.iter().flat_map(|w| &w.fixtures)
    }

    pub fn fixture_count(&self) -> usize {
        self.weeks.iter().map(|w| w.fixtures.len()).sum()
    }
}
