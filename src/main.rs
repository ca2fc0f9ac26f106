mod config;

use crate::config::AppConfig;
use color_eyre::eyre::{Result, WrapErr};
use database::LeagueStore;
use env_logger::Env;
use league_core::{LeagueRepository, LeagueSimulator, TimeEstimation};
use log::info;
use web::{LeagueAppData, LeagueSimulatorServer};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let mut store =
        LeagueStore::open(config.store_path.as_deref()).wrap_err("failed to open league store")?;

    info!(
        "league store: {}",
        if store.is_durable() { "file" } else { "memory" }
    );

    // every process start plays a fresh season
    store.reset().wrap_err("failed to reset league store")?;

    let (simulator, estimated) = TimeEstimation::estimate(|| {
        LeagueSimulator::create_season(store, config.teams, config.settings)
    });
    let simulator = simulator.wrap_err("failed to create season")?;

    info!("season ready: {} ms", estimated);

    LeagueSimulatorServer::new(LeagueAppData::new(simulator))
        .run(config.addr)
        .await
        .wrap_err("server stopped")?;

    Ok(())
}
