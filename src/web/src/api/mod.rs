pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use league_core::{Competitor, MatchResultView, ResultScope};
use serde::{Deserialize, Serialize};

pub fn api_routes() -> Router<LeagueAppData> {
    routes::routes()
}

#[derive(Deserialize)]
pub struct ResultsQuery {
    pub scope: Option<String>,
}

impl ResultsQuery {
    fn scope(&self) -> ApiResult<ResultScope> {
        match self.scope.as_deref() {
            None | Some("week") => Ok(ResultScope::CurrentWeek),
            Some("all") => Ok(ResultScope::All),
            Some(other) => Err(ApiError::BadRequest(format!(
                "unknown results scope '{}', expected 'week' or 'all'",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PredictionItem {
    pub name: String,
    pub percentage: u32,
}

pub async fn standings_action(State(state): State<LeagueAppData>) -> Json<Vec<Competitor>> {
    let simulator = state.league.read().await;

    Json(simulator.standings())
}

pub async fn results_action(
    State(state): State<LeagueAppData>,
    Query(query): Query<ResultsQuery>,
) -> ApiResult<Json<Vec<MatchResultView>>> {
    let scope = query.scope()?;
    let simulator = state.league.read().await;

    Ok(Json(simulator.results(scope)?))
}

pub async fn predictions_action(State(state): State<LeagueAppData>) -> Json<Vec<PredictionItem>> {
    let simulator = state.league.read().await;

    Json(prediction_items(simulator.predictions()))
}

/// Highest chance first; equal percentages keep name order.
pub fn prediction_items(predictions: league_core::Predictions) -> Vec<PredictionItem> {
    let mut items: Vec<PredictionItem> = predictions
        .into_iter()
        .map(|(name, percentage)| PredictionItem { name, percentage })
        .collect();

    items.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    items
}
