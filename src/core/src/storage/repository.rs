use crate::competitor::{Competitor, CompetitorSpec};
use crate::league::{Fixture, FixtureId, FixtureKey};
use crate::r#match::MatchScore;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable(String),
    NotFound(String),
    Transaction(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::NotFound(msg) => write!(f, "not found: {}", msg),
            StoreError::Transaction(msg) => write!(f, "transaction error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract consumed by the league engine.
///
/// Writes issued between [`begin`](LeagueRepository::begin) and
/// [`commit`](LeagueRepository::commit) become visible together or, after
/// [`rollback`](LeagueRepository::rollback), not at all.
pub trait LeagueRepository {
    fn find_all_competitors(&self) -> StoreResult<Vec<Competitor>>;

    /// Registers a competitor and returns it with its assigned id.
    fn create_competitor(&mut self, spec: &CompetitorSpec) -> StoreResult<Competitor>;

    fn save_competitor(&mut self, competitor: &Competitor) -> StoreResult<()>;

    fn find_fixture(&self, key: &FixtureKey) -> StoreResult<Option<Fixture>>;

    fn find_all_fixtures(&self) -> StoreResult<Vec<Fixture>>;

    /// Persists a fixture and returns it with its assigned id.
    fn create_fixture(&mut self, fixture: &Fixture) -> StoreResult<Fixture>;

    fn update_fixture_result(&mut self, id: FixtureId, score: MatchScore) -> StoreResult<()>;

    /// Drops every competitor and fixture.
    fn reset(&mut self) -> StoreResult<()>;

    fn begin(&mut self) -> StoreResult<()>;

    fn commit(&mut self) -> StoreResult<()>;

    fn rollback(&mut self);

    fn transaction<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> StoreResult<T>,
    {
        self.begin()?;

        match f(self) {
            Ok(value) => match self.commit() {
                Ok(()) => Ok(value),
                Err(err) => {
                    self.rollback();
                    Err(err)
                }
            },
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }
}
