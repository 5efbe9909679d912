use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::maintenance_record_dto::{MaintenanceRecordRequest, MaintenanceRecordResponse};
use crate::dto::page_dto::{PageParams, PageResponse};
use crate::services::MaintenanceRecordService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_maintenance_record_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_maintenance_records).post(create_maintenance_record),
        )
        .route(
            "/:id",
            get(get_maintenance_record)
                .put(update_maintenance_record)
                .delete(delete_maintenance_record),
        )
        .route("/truck/:truck_id", get(list_maintenance_records_by_truck))
}

async fn create_maintenance_record(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MaintenanceRecordRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRecordResponse>)> {
    let record = MaintenanceRecordService::new(&state.store)
        .create(request)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_maintenance_records(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<MaintenanceRecordResponse>>> {
    let page = MaintenanceRecordService::new(&state.store)
        .list(params.into())
        .await?;
    Ok(Json(page))
}

async fn list_maintenance_records_by_truck(
    State(state): State<AppState>,
    ApiPath(truck_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<MaintenanceRecordResponse>>> {
    let page = MaintenanceRecordService::new(&state.store)
        .list_by_truck(truck_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn get_maintenance_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MaintenanceRecordResponse>> {
    let record = MaintenanceRecordService::new(&state.store).get(id).await?;
    Ok(Json(record))
}

async fn update_maintenance_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<MaintenanceRecordRequest>,
) -> AppResult<Json<MaintenanceRecordResponse>> {
    let record = MaintenanceRecordService::new(&state.store)
        .update(id, request)
        .await?;
    Ok(Json(record))
}

async fn delete_maintenance_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    MaintenanceRecordService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
