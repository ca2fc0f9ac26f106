use crate::competitor::{Competitor, CompetitorId, CompetitorSpec};
use crate::league::{Fixture, FixtureId, FixtureKey};
use crate::r#match::MatchScore;
use crate::storage::{LeagueRepository, StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Everything a league store holds. Serializable so durable stores can
/// snapshot it as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub competitors: Vec<Competitor>,
    pub fixtures: Vec<Fixture>,
    pub next_competitor_id: CompetitorId,
    pub next_fixture_id: FixtureId,
}

impl StoreState {
    fn allocate_competitor_id(&mut self) -> CompetitorId {
        self.next_competitor_id += 1;
        self.next_competitor_id
    }

    fn allocate_fixture_id(&mut self) -> FixtureId {
        self.next_fixture_id += 1;
        self.next_fixture_id
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: StoreState,
    snapshot: Option<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        MemoryStore {
            state,
            snapshot: None,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl LeagueRepository for MemoryStore {
    fn find_all_competitors(&self) -> StoreResult<Vec<Competitor>> {
        Ok(self.state.competitors.clone())
    }

    fn create_competitor(&mut self, spec: &CompetitorSpec) -> StoreResult<Competitor> {
        let competitor = Competitor::from_spec(self.state.allocate_competitor_id(), spec);
        self.state.competitors.push(competitor.clone());
        Ok(competitor)
    }

    fn save_competitor(&mut self, competitor: &Competitor) -> StoreResult<()> {
        match self.state.competitors.iter_mut().find(|c| c.id == competitor.id) {
            Some(existing) => *existing = competitor.clone(),
            None => self.state.competitors.push(competitor.clone()),
        }
        Ok(())
    }

    fn find_fixture(&self, key: &FixtureKey) -> StoreResult<Option<Fixture>> {
        Ok(self.state.fixtures.iter().find(|f| f.key() == *key).cloned())
    }

    fn find_all_fixtures(&self) -> StoreResult<Vec<Fixture>> {
        Ok(self.state.fixtures.clone())
    }

    fn create_fixture(&mut self, fixture: &Fixture) -> StoreResult<Fixture> {
        let mut created = fixture.clone();
        created.id = self.state.allocate_fixture_id();
        self.state.fixtures.push(created.clone());
        Ok(created)
    }

    fn update_fixture_result(&mut self, id: FixtureId, score: MatchScore) -> StoreResult<()> {
        let fixture = self
            .state
            .fixtures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("fixture {}", id)))?;

        fixture.result = Some(score);
        Ok(())
    }

    fn reset(&mut self) -> StoreResult<()> {
        self.state = StoreState::default();
        Ok(())
    }

    fn begin(&mut self) -> StoreResult<()> {
        if self.snapshot.is_some() {
            return Err(StoreError::Transaction(String::from("transaction already open")));
        }
        self.snapshot = Some(self.state.clone());
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| StoreError::Transaction(String::from("no open transaction")))
    }

    fn rollback(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.state = snapshot;
        }
    }
}
