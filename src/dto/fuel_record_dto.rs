use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::FuelRecord;
use crate::utils::validation::validate_money_amount;

// Request para registrar un repostaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordRequest {
    pub truck_id: Uuid,

    pub trip_id: Option<Uuid>,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    #[validate(custom = "validate_money_amount")]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    #[validate(length(max = 200))]
    pub station: Option<String>,

    #[validate(range(min = 0.0))]
    pub odometer_reading: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordResponse {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub amount: f64,
    pub cost: Decimal,
    pub date: DateTime<Utc>,
    pub station: Option<String>,
    pub odometer_reading: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<FuelRecord> for FuelRecordResponse {
    fn from(record: FuelRecord) -> Self {
        Self {
            id: record.id,
            truck_id: record.truck_id,
            trip_id: record.trip_id,
            amount: record.amount,
            cost: record.cost,
            date: record.date,
            station: record.station,
            odometer_reading: record.odometer_reading,
            created_at: record.meta.created_at,
            updated_at: record.meta.updated_at,
        }
    }
}
