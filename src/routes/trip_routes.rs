use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::page_dto::{PageParams, PageResponse, StatusQuery};
use crate::dto::trip_dto::{TripRequest, TripResponse};
use crate::services::TripService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", get(get_trip).put(update_trip).delete(delete_trip))
        .route("/:id/status", patch(update_trip_status))
        .route("/driver/:driver_id", get(list_trips_by_driver))
        .route("/truck/:truck_id", get(list_trips_by_truck))
}

async fn create_trip(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TripRequest>,
) -> AppResult<(StatusCode, Json<TripResponse>)> {
    let trip = TripService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

async fn list_trips(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripResponse>>> {
    let page = TripService::new(&state.store).list(params.into()).await?;
    Ok(Json(page))
}

async fn list_trips_by_driver(
    State(state): State<AppState>,
    ApiPath(driver_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripResponse>>> {
    let page = TripService::new(&state.store)
        .list_by_driver(driver_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn list_trips_by_truck(
    State(state): State<AppState>,
    ApiPath(truck_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripResponse>>> {
    let page = TripService::new(&state.store)
        .list_by_truck(truck_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn get_trip(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<TripResponse>> {
    let trip = TripService::new(&state.store).get(id).await?;
    Ok(Json(trip))
}

async fn update_trip(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<TripRequest>,
) -> AppResult<Json<TripResponse>> {
    let trip = TripService::new(&state.store).update(id, request).await?;
    Ok(Json(trip))
}

async fn update_trip_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> AppResult<Json<TripResponse>> {
    let trip = TripService::new(&state.store)
        .update_status(id, &query.status)
        .await?;
    Ok(Json(trip))
}

async fn delete_trip(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    TripService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
