use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::page_dto::{PageParams, PageResponse};
use crate::dto::truck_dto::{TruckRequest, TruckResponse};
use crate::services::TruckService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trucks).post(create_truck))
        .route(
            "/:id",
            get(get_truck).put(update_truck).delete(delete_truck),
        )
}

async fn create_truck(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TruckRequest>,
) -> AppResult<(StatusCode, Json<TruckResponse>)> {
    let truck = TruckService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(truck)))
}

async fn list_trucks(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TruckResponse>>> {
    let page = TruckService::new(&state.store).list(params.into()).await?;
    Ok(Json(page))
}

async fn get_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<TruckResponse>> {
    let truck = TruckService::new(&state.store).get(id).await?;
    Ok(Json(truck))
}

async fn update_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<TruckRequest>,
) -> AppResult<Json<TruckResponse>> {
    let truck = TruckService::new(&state.store).update(id, request).await?;
    Ok(Json(truck))
}

async fn delete_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    TruckService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
