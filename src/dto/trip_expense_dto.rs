use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{ExpenseType, TripExpense};
use crate::utils::validation::validate_money_amount;

// Request para registrar un gasto de viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripExpenseRequest {
    pub trip_id: Uuid,

    #[serde(rename = "type")]
    pub expense_type: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(custom = "validate_money_amount")]
    pub amount: Decimal,

    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExpenseResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub description: Option<String>,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TripExpense> for TripExpenseResponse {
    fn from(expense: TripExpense) -> Self {
        Self {
            id: expense.id,
            trip_id: expense.trip_id,
            expense_type: expense.expense_type,
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
            created_at: expense.meta.created_at,
            updated_at: expense.meta.updated_at,
        }
    }
}
