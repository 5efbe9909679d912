//! Modelo de TripExpense

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::models::status::ExpenseType;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

/// Gasto imputado a un viaje
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TripExpense {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[sqlx(rename = "type")]
    pub expense_type: ExpenseType,
    pub description: Option<String>,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for TripExpense {
    const RESOURCE: &'static str = "TripExpense";

    fn id(&self) -> Uuid {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn reference(&self, reference: Reference) -> Option<Uuid> {
        match reference {
            Reference::Trip => Some(self.trip_id),
            _ => None,
        }
    }
}

impl PgRecord for TripExpense {
    const TABLE: &'static str = "trip_expenses";
    const COLUMNS: &'static [&'static str] = &["trip_id", "type", "description", "amount", "date"];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.trip_id)
            .bind(self.expense_type)
            .bind(self.description.clone())
            .bind(self.amount)
            .bind(self.date)
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Trip => Some("trip_id"),
            _ => None,
        }
    }
}
