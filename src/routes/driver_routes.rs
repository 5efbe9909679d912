use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::driver_dto::{DriverRequest, DriverResponse};
use crate::dto::page_dto::{PageParams, PageResponse};
use crate::services::DriverService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route(
            "/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

async fn create_driver(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DriverRequest>,
) -> AppResult<(StatusCode, Json<DriverResponse>)> {
    let driver = DriverService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

async fn list_drivers(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<DriverResponse>>> {
    let page = DriverService::new(&state.store).list(params.into()).await?;
    Ok(Json(page))
}

async fn get_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<DriverResponse>> {
    let driver = DriverService::new(&state.store).get(id).await?;
    Ok(Json(driver))
}

async fn update_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<DriverRequest>,
) -> AppResult<Json<DriverResponse>> {
    let driver = DriverService::new(&state.store).update(id, request).await?;
    Ok(Json(driver))
}

async fn delete_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    DriverService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
