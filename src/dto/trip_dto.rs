use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Trip, TripStatus};
use crate::utils::validation::{validate_date_order, validate_not_blank};

// Request para crear o reemplazar un viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_trip_dates"))]
pub struct TripRequest {
    #[validate(length(max = 200), custom = "validate_not_blank")]
    pub origin: String,

    #[validate(length(max = 200), custom = "validate_not_blank")]
    pub destination: String,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    pub driver_id: Option<Uuid>,

    pub truck_id: Option<Uuid>,

    pub status: Option<String>,

    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,

    #[validate(length(max = 200))]
    pub client_name: Option<String>,
}

fn validate_trip_dates(request: &TripRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)
}

// Response de viaje
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub driver_id: Option<Uuid>,
    pub truck_id: Option<Uuid>,
    pub status: TripStatus,
    pub distance: Option<f64>,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            origin: trip.origin,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            driver_id: trip.driver_id,
            truck_id: trip.truck_id,
            status: trip.status,
            distance: trip.distance,
            client_name: trip.client_name,
            created_at: trip.meta.created_at,
            updated_at: trip.meta.updated_at,
        }
    }
}
