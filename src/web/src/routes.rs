use crate::LeagueAppData;
use crate::api::api_routes;
use crate::common::default_handler::default_handler;
use crate::league::league_routes;
use crate::season::season_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(league_routes())
            .merge(season_routes())
            .merge(api_routes())
            .fallback(default_handler)
    }
}
