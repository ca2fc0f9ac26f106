mod api;
mod process;
pub mod routes;

pub use api::SeasonView;
pub use process::exclusive;

use crate::LeagueAppData;
use axum::Router;

pub fn season_routes() -> Router<LeagueAppData> {
    routes::routes()
}
