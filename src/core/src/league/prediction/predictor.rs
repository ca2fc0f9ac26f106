use crate::league::LeagueTable;
use std::collections::BTreeMap;

/// Championship likelihood per competitor name, in whole percent.
pub type Predictions = BTreeMap<String, u32>;

/// Weeks that must be played before an estimate is produced.
pub const PREDICTION_MIN_WEEKS: usize = 4;

pub trait ChampionshipPredictor: Send + Sync {
    fn predict(&self, table: &LeagueTable, current_week: usize) -> Predictions;
}

/// Naive heuristic: a competitor's share of all points awarded so far.
///
/// Each percentage is floored on its own, so the values need not add up
/// to 100. When no points have been awarded every competitor gets 0.
pub struct PointsSharePredictor {
    min_weeks: usize,
}

impl PointsSharePredictor {
    pub fn new(min_weeks: usize) -> Self {
        PointsSharePredictor { min_weeks }
    }
}

impl Default for PointsSharePredictor {
    fn default() -> Self {
        PointsSharePredictor::new(PREDICTION_MIN_WEEKS)
    }
}

impl ChampionshipPredictor for PointsSharePredictor {
    fn predict(&self, table: &LeagueTable, current_week: usize) -> Predictions {
        if current_week < self.min_weeks {
            return Predictions::new();
        }

        let total_points = table.total_points();

        table
            .rows
            .iter()
            .map(|competitor| {
                let percentage = match total_points {
                    0 => 0,
                    total => competitor.points as u32 * 100 / total,
                };
                (competitor.name.clone(), percentage)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitor::Competitor;

    fn table_with_points(points: &[(&str, u16)]) -> LeagueTable {
        LeagueTable::new(
            points
                .iter()
                .enumerate()
                .map(|(idx, (name, points))| {
                    let mut competitor = Competitor::new(idx as u32 + 1, *name, 3);
                    competitor.points = *points;
                    competitor
                })
                .collect(),
        )
    }

    #[test]
    fn test_no_estimate_before_week_four() {
        let table = table_with_points(&[("Chelsea", 9), ("Arsenal", 3)]);
        let predictor = PointsSharePredictor::default();

        for week in 0..PREDICTION_MIN_WEEKS {
            assert!(predictor.predict(&table, week).is_empty());
        }
        assert!(!predictor.predict(&table, PREDICTION_MIN_WEEKS).is_empty());
    }

    #[test]
    fn test_zero_points_gives_zero_percent() {
        let table = table_with_points(&[("Chelsea", 0), ("Arsenal", 0), ("Liverpool", 0)]);

        let predictions = PointsSharePredictor::default().predict(&table, 4);

        assert_eq!(predictions.len(), 3);
        assert!(predictions.values().all(|p| *p == 0));
    }

    #[test]
    fn test_share_of_total_points() {
        let table = table_with_points(&[
            ("Chelsea", 9),
            ("Arsenal", 3),
            ("Manchester City", 0),
            ("Liverpool", 0),
        ]);

        let predictions = PointsSharePredictor::default().predict(&table, 4);

        assert_eq!(predictions["Chelsea"], 75);
        assert_eq!(predictions["Arsenal"], 25);
        assert_eq!(predictions["Liverpool"], 0);
    }

    #[test]
    fn test_percentages_are_floored_independently() {
        let table = table_with_points(&[("Chelsea", 1), ("Arsenal", 1), ("Liverpool", 1)]);

        let predictions = PointsSharePredictor::default().predict(&table, 6);

        assert!(predictions.values().all(|p| *p == 33));
        assert_eq!(predictions.values().sum::<u32>(), 99);
    }
}
