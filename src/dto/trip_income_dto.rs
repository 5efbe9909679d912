use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{PaymentStatus, TripIncome};
use crate::utils::validation::validate_money_amount;

// Request para registrar un ingreso de viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripIncomeRequest {
    pub trip_id: Uuid,

    #[validate(length(max = 200))]
    pub client_name: Option<String>,

    #[validate(custom = "validate_money_amount")]
    pub amount: Decimal,

    pub payment_status: Option<String>,

    pub due_date: Option<NaiveDate>,

    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripIncomeResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub client_name: Option<String>,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TripIncome> for TripIncomeResponse {
    fn from(income: TripIncome) -> Self {
        Self {
            id: income.id,
            trip_id: income.trip_id,
            client_name: income.client_name,
            amount: income.amount,
            payment_status: income.payment_status,
            due_date: income.due_date,
            paid_date: income.paid_date,
            created_at: income.meta.created_at,
            updated_at: income.meta.updated_at,
        }
    }
}
