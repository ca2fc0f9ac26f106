pub mod routes;

use crate::api::{PredictionItem, prediction_items};
use crate::season::SeasonView;
use crate::views::{self, MenuSection};
use crate::{ApiResult, LeagueAppData};
use askama::Template;
use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use itertools::*;
use league_core::{MatchResultView, ResultScope};
use std::sync::atomic::Ordering;

pub fn league_routes() -> Router<LeagueAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "league/index.html")]
pub struct LeagueGetTemplate {
    pub title: String,
    pub menu_sections: Vec<MenuSection>,
    pub season: SeasonView,
    pub table_rows: Vec<LeagueTableRow>,
    pub results_title: String,
    pub week_results: Vec<WeekResults>,
    pub predictions: Vec<PredictionItem>,
}

pub struct LeagueTableRow {
    pub position: usize,
    pub team_name: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u16,
}

pub struct WeekResults {
    pub week: u16,
    pub matches: Vec<MatchResultView>,
}

pub async fn league_get_action(State(state): State<LeagueAppData>) -> ApiResult<impl IntoResponse> {
    let show_all = state.show_all_results.load(Ordering::SeqCst);
    let scope = if show_all {
        ResultScope::All
    } else {
        ResultScope::CurrentWeek
    };

    let simulator = state.league.read().await;

    let table_rows: Vec<LeagueTableRow> = simulator
        .standings()
        .iter()
        .enumerate()
        .map(|(idx, c)| LeagueTableRow {
            position: idx + 1,
            team_name: c.name.clone(),
            played: c.played,
            won: c.won,
            drawn: c.drawn,
            lost: c.lost,
            goals_for: c.goals_for,
            goals_against: c.goals_against,
            goal_difference: c.goal_difference,
            points: c.points,
        })
        .collect();

    let mut week_results = Vec::new();

    for (week, group) in &simulator.results(scope)?.into_iter().chunk_by(|r| r.week) {
        week_results.push(WeekResults {
            week,
            matches: group.collect(),
        });
    }

    let season = SeasonView::from(&*simulator);

    let results_title = if show_all {
        "All Results".to_string()
    } else {
        format!("Week {} Results", season.current_week)
    };

    Ok(LeagueGetTemplate {
        title: "League Simulator".to_string(),
        menu_sections: views::league_menu(&season),
        table_rows,
        results_title,
        week_results,
        predictions: prediction_items(simulator.predictions()),
        season,
    })
}
