//! Modelo de MaintenanceRecord

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::models::status::MaintenanceType;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub truck_id: Uuid,
    #[sqlx(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: Option<String>,
    pub cost: Decimal,
    pub date: DateTime<Utc>,
    pub next_due_date: Option<NaiveDate>,
    pub vendor: Option<String>,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for MaintenanceRecord {
    const RESOURCE: &'static str = "MaintenanceRecord";

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
            Reference::Truck => Some(self.truck_id),
            _ => None,
        }
    }
}

impl PgRecord for MaintenanceRecord {
    const TABLE: &'static str = "maintenance_records";
    const COLUMNS: &'static [&'static str] = &[
        "truck_id",
        "type",
        "description",
        "cost",
        "date",
        "next_due_date",
        "vendor",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.truck_id)
            .bind(self.maintenance_type)
            .bind(self.description.clone())
            .bind(self.cost)
            .bind(self.date)
            .bind(self.next_due_date)
            .bind(self.vendor.clone())
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Truck => Some("truck_id"),
            _ => None,
        }
    }
}
