use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Driver, DriverStatus};
use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar un conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub first_name: String,

    #[validate(length(max = 100), custom = "validate_not_blank")]
    pub last_name: String,

    #[validate(length(max = 50), custom = "validate_not_blank")]
    pub license_number: String,

    pub license_expiry: Option<NaiveDate>,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub assigned_truck_id: Option<Uuid>,

    pub status: Option<String>,
}

// Response de conductor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub assigned_truck_id: Option<Uuid>,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            license_number: driver.license_number,
            license_expiry: driver.license_expiry,
            phone: driver.phone,
            email: driver.email,
            assigned_truck_id: driver.assigned_truck_id,
            status: driver.status,
            created_at: driver.meta.created_at,
            updated_at: driver.meta.updated_at,
        }
    }
}
