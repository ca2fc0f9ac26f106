use crate::competitor::{Competitor, CompetitorId};
use serde::{Deserialize, Serialize};

/// Standings ledger: one row per competitor, kept in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<Competitor>,
}

impl LeagueTable {
    pub fn new(rows: Vec<Competitor>) -> Self {
        LeagueTable { rows }
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.rows.iter().find(|c| c.id == id)
    }

    /// Mutable access to two distinct rows at once.
    pub fn pair_mut(
        &mut self,
        home_id: CompetitorId,
        away_id: CompetitorId,
    ) -> Option<(&mut Competitor, &mut Competitor)> {
        if home_id == away_id {
            return None;
        }

        let home_idx = self.rows.iter().position(|c| c.id == home_id)?;
        let away_idx = self.rows.iter().position(|c| c.id == away_id)?;

        if home_idx < away_idx {
            let (left, right) = self.rows.split_at_mut(away_idx);
            Some((&mut left[home_idx], &mut right[0]))
        } else {
            let (left, right) = self.rows.split_at_mut(home_idx);
            Some((&mut right[0], &mut left[away_idx]))
        }
    }

    pub fn name_of(&self, id: CompetitorId) -> &str {
        self.competitor(id).map(|c| c.name.as_str()).unwrap_or("unknown")
    }

    /// Rows ordered by points descending. Ties keep registration order.
    pub fn standings(&self) -> Vec<Competitor> {
        let mut sorted = self.rows.clone();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));
        sorted
    }

    pub fn total_points(&self) -> u32 {
        self.rows.iter().map(|c| c.points as u32).sum()
    }
}
