//! Backend de gestión de flota
//!
//! CRUD de camiones, conductores, viajes, repostajes, mantenimientos y
//! finanzas de viaje, más el panel de control agregado.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Construir la aplicación completa con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    routes::create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
