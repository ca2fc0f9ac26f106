use crate::season::exclusive;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use database::LeagueStore;
use league_core::{LeagueSimulator, MatchResultView, ResultScope, SeasonState};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeasonView {
    pub current_week: usize,
    pub week_count: usize,
    pub state: SeasonState,
    pub seed: u64,
}

impl From<&LeagueSimulator<LeagueStore>> for SeasonView {
    fn from(simulator: &LeagueSimulator<LeagueStore>) -> Self {
        SeasonView {
            current_week: simulator.current_week(),
            week_count: simulator.week_count(),
            state: simulator.state(),
            seed: simulator.seed(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceView {
    pub weeks_played: Vec<u16>,
    pub results: Vec<MatchResultView>,
    pub season: SeasonView,
}

pub async fn season_get_action(State(state): State<LeagueAppData>) -> Json<SeasonView> {
    let simulator = state.league.read().await;

    Json(SeasonView::from(&*simulator))
}

pub async fn season_advance_action(State(state): State<LeagueAppData>) -> ApiResult<Json<AdvanceView>> {
    let view = exclusive(&state, |simulator| {
        let weeks_played = simulator.advance_one_week()?.map(|week| week.week).into_iter().collect();
        advance_view(simulator, weeks_played)
    })
    .await?;

    Ok(Json(view))
}

pub async fn season_advance_all_action(State(state): State<LeagueAppData>) -> ApiResult<Json<AdvanceView>> {
    let view = exclusive(&state, |simulator| {
        let weeks_played = simulator
            .advance_all_remaining()?
            .iter()
            .map(|week| week.week)
            .collect();
        advance_view(simulator, weeks_played)
    })
    .await?;

    Ok(Json(view))
}

fn advance_view(
    simulator: &LeagueSimulator<LeagueStore>,
    weeks_played: Vec<u16>,
) -> league_core::LeagueResult<AdvanceView> {
    let results = simulator
        .results(ResultScope::All)?
        .into_iter()
        .filter(|result| weeks_played.contains(&result.week))
        .collect();

    Ok(AdvanceView {
        weeks_played,
        results,
        season: SeasonView::from(simulator),
    })
}
