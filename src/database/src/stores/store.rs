use crate::stores::FileStore;
use league_core::{
    Competitor, CompetitorSpec, Fixture, FixtureId, FixtureKey, LeagueRepository, MatchScore,
    MemoryStore, StoreResult,
};
use log::info;
use std::path::Path;

/// Backend chosen at startup: in-process only, or mirrored to a file.
pub enum LeagueStore {
    Memory(MemoryStore),
    File(FileStore),
}

impl LeagueStore {
    pub fn open(path: Option<&Path>) -> StoreResult<Self> {
        match path {
            Some(path) => Ok(LeagueStore::File(FileStore::open(path)?)),
            None => {
                info!("using in-memory store");
                Ok(LeagueStore::Memory(MemoryStore::new()))
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, LeagueStore::File(_))
    }
}

macro_rules! delegate {
    ($self:ident, $store:ident => $call:expr) => {
        match $self {
            LeagueStore::Memory($store) => $call,
            LeagueStore::File($store) => $call,
        }
    };
}

impl LeagueRepository for LeagueStore {
    fn find_all_competitors(&self) -> StoreResult<Vec<Competitor>> {
        delegate!(self, store => store.find_all_competitors())
    }

    fn create_competitor(&mut self, spec: &CompetitorSpec) -> StoreResult<Competitor> {
        delegate!(self, store => store.create_competitor(spec))
    }

    fn save_competitor(&mut self, competitor: &Competitor) -> StoreResult<()> {
        delegate!(self, store => store.save_competitor(competitor))
    }

    fn find_fixture(&self, key: &FixtureKey) -> StoreResult<Option<Fixture>> {
        delegate!(self, store => store.find_fixture(key))
    }

    fn find_all_fixtures(&self) -> StoreResult<Vec<Fixture>> {
        delegate!(self, store => store.find_all_fixtures())
    }

    fn create_fixture(&mut self, fixture: &Fixture) -> StoreResult<Fixture> {
        delegate!(self, store => store.create_fixture(fixture))
    }

    fn update_fixture_result(&mut self, id: FixtureId, score: MatchScore) -> StoreResult<()> {
        delegate!(self, store => store.update_fixture_result(id, score))
    }

    fn reset(&mut self) -> StoreResult<()> {
        delegate!(self, store => store.reset())
    }

    fn begin(&mut self) -> StoreResult<()> {
        delegate!(self, store => store.begin())
    }

    fn commit(&mut self) -> StoreResult<()> {
        delegate!(self, store => store.commit())
    }

    fn rollback(&mut self) {
        delegate!(self, store => store.rollback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::{LeagueSimulator, ResultScope, SimulatorSettings};

    #[test]
    fn test_memory_store_without_path() {
        let store = LeagueStore::open(None).unwrap();

        assert!(!store.is_durable());
    }

    #[test]
    fn test_file_store_runs_a_season_and_reloads() {
        let dir = std::env::temp_dir().join(format!("league-store-enum-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("league.json.gz");

        let standings = {
            let store = LeagueStore::open(Some(path.as_path())).unwrap();
            assert!(store.is_durable());

            let mut simulator = LeagueSimulator::create_season(
                store,
                crate::CompetitorLoader::load().unwrap(),
                SimulatorSettings {
                    seed: Some(77),
                    ..Default::default()
                },
            )
            .unwrap();

            simulator.advance_all_remaining().unwrap();
            assert_eq!(simulator.results(ResultScope::All).unwrap().len(), 12);

            simulator.standings()
        };

        let reopened = LeagueStore::open(Some(path.as_path())).unwrap();
        let mut stored = reopened.find_all_competitors().unwrap();
        stored.sort_by(|a, b| b.points.cmp(&a.points));

        assert_eq!(
            stored.iter().map(|c| c.points).collect::<Vec<_>>(),
            standings.iter().map(|c| c.points).collect::<Vec<_>>()
        );
        assert!(reopened.find_all_fixtures().unwrap().iter().all(|f| f.is_played()));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
