use crate::LeagueAppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/next_week", get(super::process::next_week_action))
        .route("/play_all", get(super::process::play_all_action))
        .route("/new_season", get(super::process::new_season_action))
        .route("/api/season", get(super::api::season_get_action))
        .route("/api/season/advance", post(super::api::season_advance_action))
        .route("/api/season/advance_all", post(super::api::season_advance_all_action))
}
