use crate::competitor::{Competitor, CompetitorSpec};
use crate::league::{
    ChampionshipPredictor, League, LeagueTable, MatchResultView, PointsSharePredictor, Predictions,
    ResultScope, Schedule, ScheduleGenerator, SeasonState, WeekPartition, WeekPlan, WeekResult,
};
use crate::storage::{LeagueRepository, StoreResult};
use crate::utils::TimeEstimation;
use crate::LeagueResult;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatorSettings {
    pub partition: WeekPartition,
    /// Seed for the random source; a fresh one is drawn when unset.
    pub seed: Option<u64>,
}

/// Entry point used by the request layer.
///
/// Owns the season context, the store and the random source. Mutating
/// operations take `&mut self`, so callers sharing one simulator must put it
/// behind a lock held for the whole operation.
pub struct LeagueSimulator<S: LeagueRepository> {
    store: S,
    league: League,
    specs: Vec<CompetitorSpec>,
    generator: ScheduleGenerator,
    predictor: Box<dyn ChampionshipPredictor>,
    rng: StdRng,
    seed: u64,
}

impl<S: LeagueRepository> LeagueSimulator<S> {
    /// Registers the competitors and generates, persists and returns a fresh
    /// season. Nothing is written when the competitor set is invalid or the
    /// store fails.
    pub fn create_season(
        mut store: S,
        specs: Vec<CompetitorSpec>,
        settings: SimulatorSettings,
    ) -> LeagueResult<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = ScheduleGenerator::new(settings.partition);

        let plan = generator.plan(&specs, &mut rng)?;
        let (competitors, schedule) =
            store.transaction(|store| Self::register_season(store, &specs, &plan))?;

        info!(
            "season created: {} competitors, {} weeks (seed {}, {} partition)",
            competitors.len(),
            schedule.week_count(),
            seed,
            settings.partition
        );

        Ok(LeagueSimulator {
            store,
            league: League::new(LeagueTable::new(competitors), schedule),
            specs,
            generator,
            predictor: Box::new(PointsSharePredictor::default()),
            rng,
            seed,
        })
    }

    pub fn with_predictor(mut self, predictor: Box<dyn ChampionshipPredictor>) -> Self {
        self.predictor = predictor;
        self
    }

    /// Drops the current season and starts a new one with the same competitors.
    pub fn restart_season(&mut self) -> LeagueResult<()> {
        let plan = self.generator.plan(&self.specs, &mut self.rng)?;
        let specs = &self.specs;

        let (competitors, schedule) = self.store.transaction(|store| {
            store.reset()?;
            Self::register_season(store, specs, &plan)
        })?;

        self.league = League::new(LeagueTable::new(competitors), schedule);

        info!("season restarted with {} competitors", self.specs.len());

        Ok(())
    }

    fn register_season(
        store: &mut S,
        specs: &[CompetitorSpec],
        plan: &WeekPlan,
    ) -> StoreResult<(Vec<Competitor>, Schedule)> {
        let competitors = specs
            .iter()
            .map(|spec| store.create_competitor(spec))
            .collect::<StoreResult<Vec<Competitor>>>()?;

        let schedule = ScheduleGenerator::persist(plan, &competitors, store)?;

        Ok((competitors, schedule))
    }

    pub fn advance_one_week(&mut self) -> LeagueResult<Option<WeekResult>> {
        let (result, elapsed) = TimeEstimation::estimate(|| {
            self.league.simulate_week(&mut self.store, &mut self.rng)
        });

        if let Ok(Some(week)) = &result {
            info!("week {} advanced in {} ms", week.week, elapsed);
        }

        result
    }

    pub fn advance_all_remaining(&mut self) -> LeagueResult<Vec<WeekResult>> {
        let (result, elapsed) = TimeEstimation::estimate(|| {
            self.league.simulate_remaining(&mut self.store, &mut self.rng)
        });

        if let Ok(weeks) = &result {
            info!("{} remaining weeks advanced in {} ms", weeks.len(), elapsed);
        }

        result
    }

    /// Competitors ordered by points, ties in registration order.
    pub fn standings(&self) -> Vec<Competitor> {
        self.league.table.standings()
    }

    /// Played fixtures as persisted, with competitor names resolved.
    pub fn results(&self, scope: ResultScope) -> LeagueResult<Vec<MatchResultView>> {
        let current_week = self.league.current_week;

        let mut fixtures: Vec<_> = self
            .store
            .find_all_fixtures()?
            .into_iter()
            .filter(|f| f.is_played())
            .filter(|f| match scope {
                ResultScope::CurrentWeek => f.week as usize == current_week,
                ResultScope::All => true,
            })
            .collect();

        fixtures.sort_by_key(|f| (f.week, f.id));

        Ok(fixtures
            .iter()
            .filter_map(|f| MatchResultView::from_fixture(f, &self.league.table))
            .collect())
    }

    pub fn predictions(&self) -> Predictions {
        self.predictor.predict(&self.league.table, self.league.current_week)
    }

    pub fn current_week(&self) -> usize {
        self.league.current_week
    }

    pub fn week_count(&self) -> usize {
        self.league.week_count()
    }

    pub fn state(&self) -> SeasonState {
        self.league.state()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
