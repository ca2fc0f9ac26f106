use crate::competitor::Competitor;
use crate::league::{Fixture, LeagueTable, Schedule, SeasonState, WeekResult};
use crate::r#match::{MatchEngine, MatchScore};
use crate::storage::LeagueRepository;
use crate::{LeagueError, LeagueResult};
use log::{debug, error, info};
use rand::Rng;

/// One season of a single-group league: the schedule, the standings ledger
/// and the number of weeks already played.
#[derive(Debug, Clone)]
pub struct League {
    pub schedule: Schedule,
    pub table: LeagueTable,
    /// 0-based index of the next week to play; equals the number of weeks played.
    pub current_week: usize,
}

impl League {
    pub fn new(table: LeagueTable, schedule: Schedule) -> Self {
        League {
            schedule,
            table,
            current_week: 0,
        }
    }

    pub fn week_count(&self) -> usize {
        self.schedule.week_count()
    }

    pub fn state(&self) -> SeasonState {
        SeasonState::from_progress(self.current_week, self.week_count())
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SeasonState::Complete
    }

    /// Plays every fixture of the current week and persists the outcome.
    ///
    /// The week is simulated against a staged copy of the ledger and every
    /// fixture and ledger write goes through one store transaction. In-memory
    /// state only moves forward once that transaction commits, so a failure
    /// leaves the league exactly as it was. Returns `None` once the season
    /// is complete.
    pub fn simulate_week<S, R>(&mut self, store: &mut S, rng: &mut R) -> LeagueResult<Option<WeekResult>>
    where
        S: LeagueRepository,
        R: Rng + ?Sized,
    {
        let Some(week) = self.schedule.week(self.current_week) else {
            return Ok(None);
        };
        let week_number = week.number;

        let mut table = self.table.clone();
        let mut played: Vec<(Fixture, MatchScore)> = Vec::with_capacity(week.fixtures.len());

        for fixture in &week.fixtures {
            let (home, away) = table
                .pair_mut(fixture.home_id, fixture.away_id)
                .ok_or_else(|| Self::missing_competitor(&self.table, fixture))?;

            let score = MatchEngine::play(home, away, rng);

            debug!(
                "week {}: {} {} - {} {}",
                week_number, home.name, score.home_goals, score.away_goals, away.name
            );

            played.push((fixture.clone(), score));
        }

        let touched: Vec<Competitor> = table
            .rows
            .iter()
            .filter(|c| played.iter().any(|(f, _)| f.involves(c.id)))
            .cloned()
            .collect();

        let persisted = store
            .transaction(|store| {
                let mut persisted = Vec::with_capacity(played.len());

                for (fixture, score) in &played {
                    let mut result = match store.find_fixture(&fixture.key())? {
                        Some(existing) => {
                            store.update_fixture_result(existing.id, *score)?;
                            existing
                        }
                        None => store.create_fixture(&Fixture {
                            result: Some(*score),
                            ..fixture.clone()
                        })?,
                    };
                    result.result = Some(*score);
                    persisted.push(result);
                }

                for competitor in &touched {
                    store.save_competitor(competitor)?;
                }

                Ok(persisted)
            })
            .map_err(|err| {
                error!("week {} was not advanced: {}", week_number, err);
                LeagueError::from(err)
            })?;

        self.schedule.weeks[self.current_week].fixtures = persisted.clone();
        self.table = table;
        self.current_week += 1;

        info!(
            "week {} played ({}/{} weeks, {})",
            week_number,
            self.current_week,
            self.week_count(),
            self.state()
        );

        Ok(Some(WeekResult::new(week_number, persisted)))
    }

    /// Plays weeks in order until the season is complete.
    pub fn simulate_remaining<S, R>(&mut self, store: &mut S, rng: &mut R) -> LeagueResult<Vec<WeekResult>>
    where
        S: LeagueRepository,
        R: Rng + ?Sized,
    {
        let mut results = Vec::with_capacity(self.week_count() - self.current_week.min(self.week_count()));

        while let Some(result) = self.simulate_week(store, rng)? {
            results.push(result);
        }

        Ok(results)
    }

    fn missing_competitor(table: &LeagueTable, fixture: &Fixture) -> LeagueError {
        let id = if table.competitor(fixture.home_id).is_none() {
            fixture.home_id
        } else {
            fixture.away_id
        };
        LeagueError::UnknownCompetitor(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitor::CompetitorSpec;
    use crate::league::{ScheduleGenerator, WeekPartition};
    use crate::storage::flaky::FlakyStore;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn premier_league(store: &mut impl LeagueRepository, rng: &mut StdRng) -> League {
        let specs = [
            CompetitorSpec::new("Chelsea", 5),
            CompetitorSpec::new("Arsenal", 4),
            CompetitorSpec::new("Manchester City", 3),
            CompetitorSpec::new("Liverpool", 2),
        ];

        let competitors: Vec<Competitor> = specs
            .iter()
            .map(|spec| store.create_competitor(spec).unwrap())
            .collect();

        let schedule = ScheduleGenerator::new(WeekPartition::Shuffled)
            .generate(&competitors, store, rng)
            .unwrap();

        League::new(LeagueTable::new(competitors), schedule)
    }

    fn played_in_store(store: &impl LeagueRepository) -> usize {
        store
            .find_all_fixtures()
            .unwrap()
            .iter()
            .filter(|f| f.is_played())
            .count()
    }

    #[test]
    fn test_four_team_season_walkthrough() {
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut league = premier_league(&mut store, &mut rng);

        assert_eq!(league.week_count(), 6);
        assert_eq!(league.schedule.fixture_count(), 12);
        assert!(league.schedule.weeks.iter().all(|w| w.fixtures.len() == 2));
        assert_eq!(league.state(), SeasonState::NotStarted);

        let first = league.simulate_week(&mut store, &mut rng).unwrap().unwrap();

        assert_eq!(first.week, 1);
        assert_eq!(first.fixtures.len(), 2);
        assert_eq!(league.current_week, 1);
        assert_eq!(league.state(), SeasonState::InProgress);
        assert!(league.schedule.weeks[0].is_played());
        assert!(!league.schedule.weeks[1].is_played());
        assert_eq!(played_in_store(&store), 2);

        let rest = league.simulate_remaining(&mut store, &mut rng).unwrap();

        assert_eq!(rest.len(), 5);
        assert_eq!(league.current_week, 6);
        assert!(league.is_complete());
        assert_eq!(played_in_store(&store), 12);
        assert!(league.table.rows.iter().all(|c| c.played == 6));
    }

    #[test]
    fn test_completed_season_accounting_balances() {
        for seed in 0..20 {
            let mut store = MemoryStore::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut league = premier_league(&mut store, &mut rng);

            league.simulate_remaining(&mut store, &mut rng).unwrap();

            let rows = &league.table.rows;
            let won: u16 = rows.iter().map(|c| c.won).sum();
            let lost: u16 = rows.iter().map(|c| c.lost).sum();
            let drawn: u16 = rows.iter().map(|c| c.drawn).sum();
            let goal_difference: i32 = rows.iter().map(|c| c.goal_difference).sum();
            let points: u16 = rows.iter().map(|c| c.points).sum();

            assert_eq!(won, lost);
            assert_eq!(drawn % 2, 0);
            assert_eq!(goal_difference, 0);
            assert_eq!(points, won * 3 + drawn);
            assert!(rows.iter().all(|c| c.played == 6));
        }
    }

    #[test]
    fn test_ledgers_and_fixtures_persisted_together() {
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mut league = premier_league(&mut store, &mut rng);

        league.simulate_remaining(&mut store, &mut rng).unwrap();

        assert_eq!(store.find_all_competitors().unwrap(), league.table.rows);

        let stored = store.find_all_fixtures().unwrap();
        for fixture in league.schedule.fixtures() {
            assert!(stored.contains(fixture));
        }
    }

    #[test]
    fn test_advancing_complete_season_is_noop() {
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(8);
        let mut league = premier_league(&mut store, &mut rng);
        league.simulate_remaining(&mut store, &mut rng).unwrap();

        let table = league.table.clone();
        let fixtures = store.find_all_fixtures().unwrap();

        assert!(league.simulate_week(&mut store, &mut rng).unwrap().is_none());
        assert!(league.simulate_week(&mut store, &mut rng).unwrap().is_none());
        assert!(league.simulate_remaining(&mut store, &mut rng).unwrap().is_empty());

        assert_eq!(league.current_week, 6);
        assert_eq!(league.table, table);
        assert_eq!(store.find_all_fixtures().unwrap(), fixtures);
    }

    #[test]
    fn test_missing_persisted_fixture_is_created() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut setup_store = MemoryStore::new();
        let mut league = premier_league(&mut setup_store, &mut rng);

        let mut store = MemoryStore::new();
        for competitor in &league.table.rows {
            store.save_competitor(competitor).unwrap();
        }

        let result = league.simulate_week(&mut store, &mut rng).unwrap().unwrap();

        let stored = store.find_all_fixtures().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|f| f.is_played() && f.week == 1));
        assert_eq!(stored, result.fixtures);
    }

    #[test]
    fn test_failed_week_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut store = FlakyStore::new(MemoryStore::new());
        let mut league = premier_league(&mut store, &mut rng);
        league.simulate_week(&mut store, &mut rng).unwrap();

        let table = league.table.clone();
        let schedule = league.schedule.clone();
        let persisted = store.inner.state().clone();

        // two fixture updates succeed, the first ledger save fails
        store.fail_after(2);
        let result = league.simulate_week(&mut store, &mut rng);

        assert!(matches!(result, Err(LeagueError::StoreUnavailable(_))));
        assert_eq!(league.current_week, 1);
        assert_eq!(league.table, table);
        assert_eq!(league.schedule, schedule);
        assert_eq!(store.inner.state(), &persisted);
        assert!(!store.inner.in_transaction());
    }

    #[test]
    fn test_unknown_competitor_is_reported() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut store = MemoryStore::new();
        let mut league = premier_league(&mut store, &mut rng);
        league.table.rows.retain(|c| c.name != "Liverpool");

        let mut failed = false;
        for _ in 0..league.week_count() {
            match league.simulate_week(&mut store, &mut rng) {
                Err(LeagueError::UnknownCompetitor(_)) => {
                    failed = true;
                    break;
                }
                Ok(_) => {}
                Err(err) => panic!("unexpected error: {}", err),
            }
        }

        assert!(failed);
    }
}
