use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::dto::page_dto::{PageParams, PageResponse};
use crate::dto::trip_expense_dto::{TripExpenseRequest, TripExpenseResponse};
use crate::services::TripExpenseService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_trip_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trip_expenses).post(create_trip_expense))
        .route(
            "/:id",
            get(get_trip_expense)
                .put(update_trip_expense)
                .delete(delete_trip_expense),
        )
        .route("/trip/:trip_id", get(list_trip_expenses_by_trip))
}

async fn create_trip_expense(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TripExpenseRequest>,
) -> AppResult<(StatusCode, Json<TripExpenseResponse>)> {
    let expense = TripExpenseService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn list_trip_expenses(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripExpenseResponse>>> {
    let page = TripExpenseService::new(&state.store)
        .list(params.into())
        .await?;
    Ok(Json(page))
}

async fn list_trip_expenses_by_trip(
    State(state): State<AppState>,
    ApiPath(trip_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripExpenseResponse>>> {
    let page = TripExpenseService::new(&state.store)
        .list_by_trip(trip_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn get_trip_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<TripExpenseResponse>> {
    let expense = TripExpenseService::new(&state.store).get(id).await?;
    Ok(Json(expense))
}

async fn update_trip_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<TripExpenseRequest>,
) -> AppResult<Json<TripExpenseResponse>> {
    let expense = TripExpenseService::new(&state.store)
        .update(id, request)
        .await?;
    Ok(Json(expense))
}

async fn delete_trip_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    TripExpenseService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
