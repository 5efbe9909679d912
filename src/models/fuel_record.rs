//! Modelo de FuelRecord
//!
//! Repostajes: `amount` en litros, `cost` en moneda.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::repositories::postgres::{PgQueryAs, PgRecord};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FuelRecord {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub amount: f64,
    pub cost: Decimal,
    pub date: DateTime<Utc>,
    pub station: Option<String>,
    pub odometer_reading: Option<f64>,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for FuelRecord {
    const RESOURCE: &'static str = "FuelRecord";

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
            Reference::Trip => self.trip_id,
            Reference::Driver => None,
        }
    }
}

impl PgRecord for FuelRecord {
    const TABLE: &'static str = "fuel_records";
    const COLUMNS: &'static [&'static str] = &[
        "truck_id",
        "trip_id",
        "amount",
        "cost",
        "date",
        "station",
        "odometer_reading",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.truck_id)
            .bind(self.trip_id)
            .bind(self.amount)
            .bind(self.cost)
            .bind(self.date)
            .bind(self.station.clone())
            .bind(self.odometer_reading)
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Truck => Some("truck_id"),
            Reference::Trip => Some("trip_id"),
            Reference::Driver => None,
        }
    }
}
