use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::page_dto::{PageParams, PageResponse, StatusQuery};
use crate::dto::trip_income_dto::{TripIncomeRequest, TripIncomeResponse};
use crate::services::TripIncomeService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extract::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_trip_income_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trip_incomes).post(create_trip_income))
        .route(
            "/:id",
            get(get_trip_income)
                .put(update_trip_income)
                .delete(delete_trip_income),
        )
        .route("/:id/payment-status", patch(update_payment_status))
        .route("/trip/:trip_id", get(list_trip_incomes_by_trip))
}

async fn create_trip_income(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TripIncomeRequest>,
) -> AppResult<(StatusCode, Json<TripIncomeResponse>)> {
    let income = TripIncomeService::new(&state.store).create(request).await?;
    Ok((StatusCode::CREATED, Json(income)))
}

async fn list_trip_incomes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripIncomeResponse>>> {
    let page = TripIncomeService::new(&state.store)
        .list(params.into())
        .await?;
    Ok(Json(page))
}

async fn list_trip_incomes_by_trip(
    State(state): State<AppState>,
    ApiPath(trip_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<PageResponse<TripIncomeResponse>>> {
    let page = TripIncomeService::new(&state.store)
        .list_by_trip(trip_id, params.into())
        .await?;
    Ok(Json(page))
}

async fn get_trip_income(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<TripIncomeResponse>> {
    let income = TripIncomeService::new(&state.store).get(id).await?;
    Ok(Json(income))
}

async fn update_trip_income(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<TripIncomeRequest>,
) -> AppResult<Json<TripIncomeResponse>> {
    let income = TripIncomeService::new(&state.store)
        .update(id, request)
        .await?;
    Ok(Json(income))
}

async fn update_payment_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> AppResult<Json<TripIncomeResponse>> {
    let income = TripIncomeService::new(&state.store)
        .update_payment_status(id, &query.status)
        .await?;
    Ok(Json(income))
}

async fn delete_trip_income(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    TripIncomeService::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
