use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::fuel_record_dto::{FuelRecordRequest, FuelRecordResponse};
use crate::dto::page_dto::{PageParams, PageResponse};
use crate::services::FuelRecordService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_fuel_record_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_records).post(create_fuel_record))
        .route(
            "/:id",
            get(get_fuel_record)
                .put(update_fuel_record)
                .delete(delete_fuel_record),
        )
        .route("/truck/:truck_id", get(list_fuel_records_by_truck))
}

async fn create_fuel_record(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FuelRecordRequest>,
) -> AppResult<(StatusCode, Json<FuelRecordResponse>)> {
    let record = FuelRecordService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_fuel_records(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<FuelRecordResponse>>> {
    let page = FuelRecordService::new(&state.store)
        .list(params.into())
        .await?;
    Ok(Json(page))
}

async fn list_fuel_records_by_truck(
    State(state): State<AppState>,
    ApiPath(truck_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<FuelRecordResponse>>> {
    let page = FuelRecordService::new(&state.store)
        .list_by_truck(truck_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn get_fuel_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<FuelRecordResponse>> {
    let record = FuelRecordService::new(&state.store).get(id).await?;
    Ok(Json(record))
}

async fn update_fuel_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<FuelRecordRequest>,
) -> AppResult<Json<FuelRecordResponse>> {
    let record = FuelRecordService::new(&state.store)
        .update(id, request)
        .await?;
    Ok(Json(record))
}

async fn delete_fuel_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    FuelRecordService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
