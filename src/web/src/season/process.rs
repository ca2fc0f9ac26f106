use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::State;
use axum::response::Redirect;
use database::LeagueStore;
use league_core::{LeagueResult, LeagueSimulator};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Runs `action` on the blocking pool while holding the simulator write lock.
///
/// The guard moves into the blocking task: once started, an advance runs to
/// completion and releases the lock even if the request is dropped.
pub async fn exclusive<T, F>(state: &LeagueAppData, action: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut LeagueSimulator<LeagueStore>) -> LeagueResult<T> + Send + 'static,
{
    let mut guard = Arc::clone(&state.league).write_owned().await;

    tokio::task::spawn_blocking(move || action(&mut *guard))
        .await
        .map_err(|err| ApiError::InternalError(format!("simulation task failed: {}", err)))?
        .map_err(ApiError::from)
}

pub async fn next_week_action(State(state): State<LeagueAppData>) -> ApiResult<Redirect> {
    let week = exclusive(&state, |simulator| simulator.advance_one_week()).await?;

    if week.is_none() {
        debug!("next week requested on a complete season");
    }

    Ok(Redirect::to("/"))
}

pub async fn play_all_action(State(state): State<LeagueAppData>) -> ApiResult<Redirect> {
    let show_all_results = Arc::clone(&state.show_all_results);

    exclusive(&state, move |simulator| {
        simulator.advance_all_remaining()?;
        show_all_results.store(true, Ordering::SeqCst);
        Ok(())
    })
    .await?;

    Ok(Redirect::to("/"))
}

pub async fn new_season_action(State(state): State<LeagueAppData>) -> ApiResult<Redirect> {
    let show_all_results = Arc::clone(&state.show_all_results);

    exclusive(&state, move |simulator| {
        simulator.restart_season()?;
        show_all_results.store(false, Ordering::SeqCst);
        Ok(())
    })
    .await?;

    Ok(Redirect::to("/"))
}
