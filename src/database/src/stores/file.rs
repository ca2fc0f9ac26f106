use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use league_core::{
    Competitor, CompetitorSpec, Fixture, FixtureId, FixtureKey, LeagueRepository, MatchScore,
    MemoryStore, StoreError, StoreResult, StoreState,
};
use log::{debug, info};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Durable store keeping the whole league as one gzip-compressed JSON document.
///
/// Writes land in memory first; the document is rewritten on every commit,
/// and after each write issued outside a transaction.
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Opens the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let state = Self::load(&path)?;

        info!(
            "file store opened: {} ({} competitors, {} fixtures)",
            path.display(),
            state.competitors.len(),
            state.fixtures.len()
        );

        Ok(FileStore {
            path,
            memory: MemoryStore::with_state(state),
        })
    }

    fn load(path: &Path) -> StoreResult<StoreState> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoreState::default()),
            Err(err) => return Err(unavailable(path, err)),
        };

        let decoder = GzDecoder::new(BufReader::new(file));

        serde_json::from_reader(decoder).map_err(|err| unavailable(path, err))
    }

    fn persist(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| unavailable(parent, err))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        let file = File::create(&tmp_path).map_err(|err| unavailable(&tmp_path, err))?;

        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        serde_json::to_writer(&mut encoder, self.memory.state())
            .map_err(|err| unavailable(&tmp_path, err))?;

        encoder
            .finish()
            .and_then(|mut writer| std::io::Write::flush(&mut writer))
            .map_err(|err| unavailable(&tmp_path, err))?;

        fs::rename(&tmp_path, &self.path).map_err(|err| unavailable(&self.path, err))?;

        debug!("file store written: {}", self.path.display());

        Ok(())
    }

    fn write<T>(&mut self, op: impl FnOnce(&mut MemoryStore) -> StoreResult<T>) -> StoreResult<T> {
        if self.memory.in_transaction() {
            return op(&mut self.memory);
        }

        self.memory.begin()?;

        match op(&mut self.memory).and_then(|value| self.persist().map(|_| value)) {
            Ok(value) => {
                self.memory.commit()?;
                Ok(value)
            }
            Err(err) => {
                self.memory.rollback();
                Err(err)
            }
        }
    }
}

fn unavailable(path: &Path, err: impl Display) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), err))
}

impl LeagueRepository for FileStore {
    fn find_all_competitors(&self) -> StoreResult<Vec<Competitor>> {
        self.memory.find_all_competitors()
    }

    fn create_competitor(&mut self, spec: &CompetitorSpec) -> StoreResult<Competitor> {
        self.write(|memory| memory.create_competitor(spec))
    }

    fn save_competitor(&mut self, competitor: &Competitor) -> StoreResult<()> {
        self.write(|memory| memory.save_competitor(competitor))
    }

    fn find_fixture(&self, key: &FixtureKey) -> StoreResult<Option<Fixture>> {
        self.memory.find_fixture(key)
    }

    fn find_all_fixtures(&self) -> StoreResult<Vec<Fixture>> {
        self.memory.find_all_fixtures()
    }

    fn create_fixture(&mut self, fixture: &Fixture) -> StoreResult<Fixture> {
        self.write(|memory| memory.create_fixture(fixture))
    }

    fn update_fixture_result(&mut self, id: FixtureId, score: MatchScore) -> StoreResult<()> {
        self.write(|memory| memory.update_fixture_result(id, score))
    }

    fn reset(&mut self) -> StoreResult<()> {
        self.write(|memory| memory.reset())
    }

    fn begin(&mut self) -> StoreResult<()> {
        self.memory.begin()
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.persist()?;
        self.memory.commit()
    }

    fn rollback(&mut self) {
        self.memory.rollback()
    }
}
