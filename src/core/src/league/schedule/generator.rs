use crate::competitor::{Competitor, CompetitorSpec};
use crate::league::{Fixture, Schedule, ScheduleWeek};
use crate::storage::{LeagueRepository, StoreResult};
use crate::{LeagueError, LeagueResult};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How the double round-robin fixture list is split into weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekPartition {
    /// The whole fixture list is shuffled and cut into weeks of `n / 2`
    /// fixtures. Weeks do not follow round boundaries, so a competitor may
    /// play more than once in a week.
    #[default]
    Shuffled,
    /// Each week is one complete round; only the order of rounds is shuffled.
    Rounds,
}

impl FromStr for WeekPartition {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shuffled" => Ok(WeekPartition::Shuffled),
            "rounds" => Ok(WeekPartition::Rounds),
            other => Err(LeagueError::InvalidConfiguration(format!(
                "unknown schedule partition '{}', expected 'shuffled' or 'rounds'",
                other
            ))),
        }
    }
}

impl fmt::Display for WeekPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekPartition::Shuffled => write!(f, "shuffled"),
            WeekPartition::Rounds => write!(f, "rounds"),
        }
    }
}

/// Home and away positions into the competitor list, one entry per fixture.
type Pairing = (usize, usize);

/// Fixture pairings grouped by week, before any id has been assigned.
pub type WeekPlan = Vec<Vec<Pairing>>;

pub struct ScheduleGenerator {
    partition: WeekPartition,
}

impl ScheduleGenerator {
    pub fn new(partition: WeekPartition) -> Self {
        ScheduleGenerator { partition }
    }

    /// Builds a double round-robin schedule and persists every fixture.
    ///
    /// All fixtures are written in one transaction, so a store failure leaves
    /// no partial schedule behind.
    #[cfg(test)]
    pub fn generate<S, R>(
        &self,
        competitors: &[Competitor],
        store: &mut S,
        rng: &mut R,
    ) -> LeagueResult<Schedule>
    where
        S: LeagueRepository,
        R: Rng + ?Sized,
    {
        let specs: Vec<CompetitorSpec> = competitors
            .iter()
            .map(|c| CompetitorSpec::new(c.name.clone(), c.strength))
            .collect();
        let plan = self.plan(&specs, rng)?;

        Ok(store.transaction(|store| Self::persist(&plan, competitors, store))?)
    }

    /// Pairs the competitors and splits the fixtures into weeks.
    pub fn plan<R: Rng + ?Sized>(&self, specs: &[CompetitorSpec], rng: &mut R) -> LeagueResult<WeekPlan> {
        Self::validate(specs)?;

        let count = specs.len();
        let rounds = Self::double_round_robin(count);

        Ok(self.partition_weeks(rounds, count / 2, rng))
    }

    /// Writes a planned schedule for `competitors`, in plan order.
    pub fn persist<S: LeagueRepository>(
        plan: &WeekPlan,
        competitors: &[Competitor],
        store: &mut S,
    ) -> StoreResult<Schedule> {
        let mut weeks = Vec::with_capacity(plan.len());

        for (idx, pairings) in plan.iter().enumerate() {
            let number = (idx + 1) as u16;
            let mut fixtures = Vec::with_capacity(pairings.len());

            for &(home, away) in pairings {
                let fixture = Fixture::new(competitors[home].id, competitors[away].id, number);
                fixtures.push(store.create_fixture(&fixture)?);
            }

            weeks.push(ScheduleWeek::new(number, fixtures));
        }

        let schedule = Schedule::new(weeks);

        info!(
            "schedule generated: {} competitors, {} weeks, {} fixtures",
            competitors.len(),
            schedule.week_count(),
            schedule.fixture_count()
        );

        for week in &schedule.weeks {
            for fixture in &week.fixtures {
                debug!("week {}: {} vs {}", week.number, fixture.home_id, fixture.away_id);
            }
        }

        Ok(schedule)
    }

    /// Competitor sets need an even size of at least two and unique names.
    pub fn validate(specs: &[CompetitorSpec]) -> LeagueResult<()> {
        let count = specs.len();

        if count < 2 {
            return Err(LeagueError::InvalidConfiguration(format!(
                "at least two competitors are required, got {}",
                count
            )));
        }

        if count % 2 != 0 {
            return Err(LeagueError::InvalidConfiguration(format!(
                "competitor count must be even, got {}",
                count
            )));
        }

        let mut names = HashSet::with_capacity(count);
        if let Some(duplicate) = specs.iter().find(|spec| !names.insert(spec.name.as_str())) {
            return Err(LeagueError::InvalidConfiguration(format!(
                "competitor name '{}' is used more than once",
                duplicate.name
            )));
        }

        Ok(())
    }

    /// Circle method: the last competitor stays fixed while the others rotate.
    /// The first pass covers every unordered pair once; the second pass
    /// mirrors it so each ordered pair is played exactly once.
    fn double_round_robin(count: usize) -> Vec<Vec<Pairing>> {
        let rotating = count - 1;

        let first_pass: Vec<Vec<Pairing>> = (0..rotating)
            .map(|round| {
                (0..count / 2)
                    .map(|i| {
                        let home = (round + i) % rotating;
                        let away = if i == 0 {
                            count - 1
                        } else {
                            (rotating - i + round) % rotating
                        };

                        if round % 2 == 0 {
                            (home, away)
                        } else {
                            (away, home)
                        }
                    })
                    .collect()
            })
            .collect();

        let second_pass: Vec<Vec<Pairing>> = first_pass
            .iter()
            .map(|round| round.iter().map(|&(home, away)| (away, home)).collect())
            .collect();

        first_pass.into_iter().chain(second_pass).collect()
    }

    fn partition_weeks<R: Rng + ?Sized>(
        &self,
        mut rounds: Vec<Vec<Pairing>>,
        fixtures_per_week: usize,
        rng: &mut R,
    ) -> WeekPlan {
        match self.partition {
            WeekPartition::Shuffled => {
                let mut pairings: Vec<Pairing> = rounds.into_iter().flatten().collect();
                pairings.shuffle(rng);

                pairings
                    .chunks(fixtures_per_week)
                    .map(|chunk| chunk.to_vec())
                    .collect()
            }
            WeekPartition::Rounds => {
                rounds.shuffle(rng);
                rounds
            }
        }
    }
}
