//! Rutas HTTP
//!
//! Cada recurso expone su propio router; aquí se anidan bajo `/api`.

pub mod dashboard_routes;
pub mod driver_routes;
pub mod fuel_record_routes;
pub mod health_routes;
pub mod maintenance_record_routes;
pub mod trip_expense_routes;
pub mod trip_income_routes;
pub mod trip_routes;
pub mod truck_routes;

use axum::Router;

use crate::state::AppState;

/// Router completo de la API (sin capas ni estado)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/trucks", truck_routes::create_truck_router())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest(
            "/api/fuel-records",
            fuel_record_routes::create_fuel_record_router(),
        )
        .nest(
            "/api/maintenance-records",
            maintenance_record_routes::create_maintenance_record_router(),
        )
        .nest(
            "/api/trip-expenses",
            trip_expense_routes::create_trip_expense_router(),
        )
        .nest(
            "/api/trip-incomes",
            trip_income_routes::create_trip_income_router(),
        )
}

/// Listado de endpoints para el log de arranque
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/api/dashboard/stats"),
    ("GET|POST", "/api/trucks"),
    ("GET|PUT|DELETE", "/api/trucks/:id"),
    ("GET|POST", "/api/drivers"),
    ("GET|PUT|DELETE", "/api/drivers/:id"),
    ("GET|POST", "/api/trips"),
    ("GET|PUT|DELETE", "/api/trips/:id"),
    ("PATCH", "/api/trips/:id/status?status="),
    ("GET", "/api/trips/driver/:driver_id"),
    ("GET", "/api/trips/truck/:truck_id"),
    ("GET|POST", "/api/fuel-records"),
    ("GET|PUT|DELETE", "/api/fuel-records/:id"),
    ("GET", "/api/fuel-records/truck/:truck_id"),
    ("GET|POST", "/api/maintenance-records"),
    ("GET|PUT|DELETE", "/api/maintenance-records/:id"),
    ("GET", "/api/maintenance-records/truck/:truck_id"),
    ("GET|POST", "/api/trip-expenses"),
    ("GET|PUT|DELETE", "/api/trip-expenses/:id"),
    ("GET", "/api/trip-expenses/trip/:trip_id"),
    ("GET|POST", "/api/trip-incomes"),
    ("GET|PUT|DELETE", "/api/trip-incomes/:id"),
    ("PATCH", "/api/trip-incomes/:id/payment-status?status="),
    ("GET", "/api/trip-incomes/trip/:trip_id"),
];
