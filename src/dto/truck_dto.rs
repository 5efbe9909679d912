use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Truck, TruckStatus};
use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar un camión
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TruckRequest {
    #[validate(length(max = 20), custom = "validate_not_blank")]
    pub plate_number: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub model: String,

    pub status: Option<String>,

    #[validate(range(min = 0.0))]
    pub capacity: Option<f64>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 0.0))]
    pub mileage: Option<f64>,
}

// Response de camión
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckResponse {
    pub id: Uuid,
    pub plate_number: String,
    pub model: String,
    pub status: TruckStatus,
    pub capacity: Option<f64>,
    pub year: Option<i32>,
    pub mileage: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Truck> for TruckResponse {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id,
            plate_number: truck.plate_number,
            model: truck.model,
            status: truck.status,
            capacity: truck.capacity,
            year: truck.year,
            mileage: truck.mileage,
            created_at: truck.meta.created_at,
            updated_at: truck.meta.updated_at,
        }
    }
}
