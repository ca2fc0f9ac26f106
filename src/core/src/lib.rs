pub mod simulator;
pub use simulator::*;

pub mod competitor;
pub mod error;
pub mod league;
pub mod r#match;
pub mod storage;
pub mod utils;

pub use competitor::{Competitor, CompetitorId, CompetitorSpec};
pub use error::{LeagueError, LeagueResult};
pub use league::{
    ChampionshipPredictor, Fixture, FixtureId, FixtureKey, League, LeagueTable, MatchResultView,
    PointsSharePredictor, Predictions, ResultScope, Schedule, ScheduleGenerator, ScheduleWeek,
    SeasonState, WeekPartition, WeekResult, PREDICTION_MIN_WEEKS,
};
pub use r#match::{MatchEngine, MatchOutcome, MatchScore};
pub use storage::{LeagueRepository, MemoryStore, StoreError, StoreResult, StoreState};
pub use utils::*;
