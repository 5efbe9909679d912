use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{MaintenanceRecord, MaintenanceType};
use crate::utils::validation::validate_money_amount;

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordRequest {
    pub truck_id: Uuid,

    #[serde(rename = "type")]
    pub maintenance_type: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(custom = "validate_money_amount")]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    pub next_due_date: Option<NaiveDate>,

    #[validate(length(max = 200))]
    pub vendor: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub truck_id: Uuid,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: Option<String>,
    pub cost: Decimal,
    pub date: DateTime<Utc>,
    pub next_due_date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<MaintenanceRecord> for MaintenanceRecordResponse {
    fn from(record: MaintenanceRecord) -> Self {
        Self {
            id: record.id,
            truck_id: record.truck_id,
            maintenance_type: record.maintenance_type,
            description: record.description,
            cost: record.cost,
            date: record.date,
            next_due_date: record.next_due_date,
            vendor: record.vendor,
            created_at: record.meta.created_at,
            updated_at: record.meta.updated_at,
        }
    }
}
