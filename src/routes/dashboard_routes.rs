use axum::{extract::State, routing::get, Json, Router};

use crate::dto::dashboard_dto::DashboardStats;
use crate::services::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_dashboard_stats))
}

async fn get_dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardService::new(&state.store).stats().await?;
    Ok(Json(stats))
}
