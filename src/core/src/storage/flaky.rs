use crate::competitor::{Competitor, CompetitorSpec};
use crate::league::{Fixture, FixtureId, FixtureKey};
use crate::r#match::MatchScore;
use crate::storage::{LeagueRepository, MemoryStore, StoreError, StoreResult};

/// Memory store that starts failing writes once its budget is spent.
pub struct FlakyStore {
    pub inner: MemoryStore,
    writes_left: Option<usize>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        FlakyStore {
            inner,
            writes_left: None,
        }
    }

    pub fn fail_after(&mut self, writes: usize) {
        self.writes_left = Some(writes);
    }

    fn write(&mut self) -> StoreResult<()> {
        match self.writes_left.as_mut() {
            Some(0) => Err(StoreError::Unavailable(String::from("connection refused"))),
            Some(left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl LeagueRepository for FlakyStore {
    fn find_all_competitors(&self) -> StoreResult<Vec<Competitor>> {
        self.inner.find_all_competitors()
    }

    fn create_competitor(&mut self, spec: &CompetitorSpec) -> StoreResult<Competitor> {
        self.write()?;
        self.inner.create_competitor(spec)
    }

    fn save_competitor(&mut self, competitor: &Competitor) -> StoreResult<()> {
        self.write()?;
        self.inner.save_competitor(competitor)
    }

    fn find_fixture(&self, key: &FixtureKey) -> StoreResult<Option<Fixture>> {
        self.inner.find_fixture(key)
    }

    fn find_all_fixtures(&self) -> StoreResult<Vec<Fixture>> {
        self.inner.find_all_fixtures()
    }

    fn create_fixture(&mut self, fixture: &Fixture) -> StoreResult<Fixture> {
        self.write()?;
        self.inner.create_fixture(fixture)
    }

    fn update_fixture_result(&mut self, id: FixtureId, score: MatchScore) -> StoreResult<()> {
        self.write()?;
        self.inner.update_fixture_result(id, score)
    }

    fn reset(&mut self) -> StoreResult<()> {
        self.inner.reset()
    }

    fn begin(&mut self) -> StoreResult<()> {
        self.inner.begin()
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.inner.commit()
    }

    fn rollback(&mut self) {
        self.inner.rollback()
    }
}
