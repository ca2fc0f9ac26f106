use color_eyre::eyre::{Result, WrapErr, eyre};
use database::CompetitorLoader;
use league_core::{CompetitorSpec, ScheduleGenerator, SimulatorSettings, WeekPartition};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Process settings read from `LEAGUE_*` environment variables.
#[derive(Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// File backing the store; the store stays in memory when unset.
    pub store_path: Option<PathBuf>,
    pub teams: Vec<CompetitorSpec>,
    pub settings: SimulatorSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let addr = value("LEAGUE_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_ADDR)
            .parse::<SocketAddr>()
            .wrap_err("LEAGUE_ADDR is not a socket address")?;

        let teams = match value("LEAGUE_TEAMS") {
            Some(teams) => parse_teams(&teams).wrap_err("LEAGUE_TEAMS is malformed")?,
            None => CompetitorLoader::load().wrap_err("embedded competitor line-up is malformed")?,
        };

        ScheduleGenerator::validate(&teams).wrap_err("LEAGUE_TEAMS is invalid")?;

        let seed = value("LEAGUE_SEED")
            .map(|seed| seed.trim().parse::<u64>())
            .transpose()
            .wrap_err("LEAGUE_SEED is not an unsigned integer")?;

        let partition = value("LEAGUE_SCHEDULE")
            .map(|partition| partition.parse::<WeekPartition>())
            .transpose()
            .wrap_err("LEAGUE_SCHEDULE is invalid")?
            .unwrap_or_default();

        Ok(AppConfig {
            addr,
            store_path: value("LEAGUE_STORE").map(PathBuf::from),
            teams,
            settings: SimulatorSettings { partition, seed },
        })
    }
}

/// Parses `Name:strength` entries separated by commas.
fn parse_teams(value: &str) -> Result<Vec<CompetitorSpec>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, strength) = entry
                .rsplit_once(':')
                .ok_or_else(|| eyre!("'{}' has no strength, expected Name:strength", entry))?;

            let name = name.trim();
            if name.is_empty() {
                return Err(eyre!("'{}' has an empty name", entry));
            }

            let strength = strength
                .trim()
                .parse::<u8>()
                .wrap_err_with(|| format!("'{}' has an invalid strength", entry))?;

            Ok(CompetitorSpec::new(name, strength))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
        assert!(config.store_path.is_none());
        assert_eq!(config.teams.len(), 4);
        assert_eq!(config.teams[0], CompetitorSpec::new("Chelsea", 5));
        assert_eq!(config.settings.partition, WeekPartition::Shuffled);
        assert!(config.settings.seed.is_none());
    }

    #[test]
    fn test_all_values_set() {
        let config = config(&[
            ("LEAGUE_ADDR", "127.0.0.1:9000"),
            ("LEAGUE_STORE", "/tmp/league.json.gz"),
            ("LEAGUE_TEAMS", "Ajax:4, PSV:3 ,Feyenoord:3,AZ:2"),
            ("LEAGUE_SEED", "42"),
            ("LEAGUE_SCHEDULE", "rounds"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/league.json.gz")));
        assert_eq!(
            config.teams,
            vec![
                CompetitorSpec::new("Ajax", 4),
                CompetitorSpec::new("PSV", 3),
                CompetitorSpec::new("Feyenoord", 3),
                CompetitorSpec::new("AZ", 2),
            ]
        );
        assert_eq!(config.settings.seed, Some(42));
        assert_eq!(config.settings.partition, WeekPartition::Rounds);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config(&[("LEAGUE_ADDR", "localhost")]).is_err());
        assert!(config(&[("LEAGUE_SEED", "-1")]).is_err());
        assert!(config(&[("LEAGUE_SCHEDULE", "weekly")]).is_err());
        assert!(config(&[("LEAGUE_TEAMS", "Ajax")]).is_err());
        assert!(config(&[("LEAGUE_TEAMS", "Ajax:strong")]).is_err());
        assert!(config(&[("LEAGUE_TEAMS", ":3")]).is_err());
        assert!(config(&[("LEAGUE_TEAMS", "Ajax:300")]).is_err());
    }

    #[test]
    fn test_duplicate_team_names_are_rejected() {
        let result = config(&[("LEAGUE_TEAMS", "Chelsea:5,Chelsea:0,Arsenal:3,Liverpool:2")]);

        let err = result.unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("'Chelsea'")));
    }

    #[test]
    fn test_team_names_may_contain_colons() {
        let teams = parse_teams("Team: Red:4,Blue:2").unwrap();

        assert_eq!(teams[0], CompetitorSpec::new("Team: Red", 4));
    }
}
