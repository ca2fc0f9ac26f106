use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/standings", get(super::standings_action))
        .route("/api/results", get(super::results_action))
        .route("/api/predictions", get(super::predictions_action))
}
