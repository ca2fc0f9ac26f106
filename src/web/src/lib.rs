mod api;
mod common;
mod error;
mod league;
mod routes;
mod season;
mod views;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::LeagueStore;
use league_core::LeagueSimulator;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub type SharedSimulator = Arc<RwLock<LeagueSimulator<LeagueStore>>>;

pub struct LeagueSimulatorServer {
    data: LeagueAppData,
}

impl LeagueSimulatorServer {
    pub fn new(data: LeagueAppData) -> Self {
        LeagueSimulatorServer { data }
    }

    pub fn router(&self) -> axum::Router {
        ServerRoutes::create()
            .layer(ServiceBuilder::new().layer(CatchPanicLayer::custom(|_err| {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error - handler panicked".to_string(),
                )
                    .into_response()
            })))
            .with_state(self.data.clone())
    }

    pub async fn run(&self, addr: SocketAddr) -> std::io::Result<()> {
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, self.router()).await.map_err(|e| {
            error!("server error: {}", e);
            e
        })
    }
}

pub struct LeagueAppData {
    pub league: SharedSimulator,
    /// Set by "play all": the page then lists every result instead of the current week's.
    pub show_all_results: Arc<AtomicBool>,
}

impl LeagueAppData {
    pub fn new(simulator: LeagueSimulator<LeagueStore>) -> Self {
        LeagueAppData {
            league: Arc::new(RwLock::new(simulator)),
            show_all_results: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Clone for LeagueAppData {
    fn clone(&self) -> Self {
        LeagueAppData {
            league: Arc::clone(&self.league),
            show_all_results: Arc::clone(&self.show_all_results),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use league_core::{CompetitorSpec, SimulatorSettings, WeekPartition};
    use tower::ServiceExt;

    pub fn app_data(seed: u64) -> LeagueAppData {
        let specs = vec![
            CompetitorSpec::new("Chelsea", 5),
            CompetitorSpec::new("Arsenal", 4),
            CompetitorSpec::new("Manchester City", 3),
            CompetitorSpec::new("Liverpool", 2),
        ];
        let settings = SimulatorSettings {
            partition: WeekPartition::Shuffled,
            seed: Some(seed),
        };
        let store = LeagueStore::open(None).unwrap();

        LeagueAppData::new(LeagueSimulator::create_season(store, specs, settings).unwrap())
    }

    pub async fn send(data: &LeagueAppData, request: Request<Body>) -> (axum::http::StatusCode, String) {
        let response = LeagueSimulatorServer::new(data.clone())
            .router()
            .oneshot(request)
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(data: &LeagueAppData, uri: &str) -> (axum::http::StatusCode, String) {
        send(data, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(data: &LeagueAppData, uri: &str) -> (axum::http::StatusCode, String) {
        send(data, Request::post(uri).body(Body::empty()).unwrap()).await
    }

    pub fn json(body: &str) -> serde_json::Value {
        serde_json::from_str(body).unwrap()
    }
}
