use crate::competitor::Competitor;
use crate::r#match::MatchScore;
use rand::{Rng, RngExt};

/// Strength based outcome simulator.
///
/// Each side scores a number of goals drawn uniformly from `0..=strength`,
/// independently of the opponent. Both ledgers are updated in place.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play<R: Rng + ?Sized>(
        home: &mut Competitor,
        away: &mut Competitor,
        rng: &mut R,
    ) -> MatchScore {
        let home_goals = rng.random_range(0..=home.strength);
        let away_goals = rng.random_range(0..=away.strength);

        home.record_match(home_goals, away_goals);
        away.record_match(away_goals, home_goals);

        MatchScore::new(home_goals, away_goals)
    }
}
