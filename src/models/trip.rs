//! Modelo de Trip
//!
//! Mapea a la tabla `trips`. Conductor y camión son referencias débiles.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::models::status::TripStatus;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

/// Viaje
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Trip {
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
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for Trip {
    const RESOURCE: &'static str = "Trip";

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
            Reference::Driver => self.driver_id,
            Reference::Truck => self.truck_id,
            Reference::Trip => None,
        }
    }
}

impl PgRecord for Trip {
    const TABLE: &'static str = "trips";
    const COLUMNS: &'static [&'static str] = &[
        "origin",
        "destination",
        "start_date",
        "end_date",
        "driver_id",
        "truck_id",
        "status",
        "distance",
        "client_name",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.origin.clone())
            .bind(self.destination.clone())
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.driver_id)
            .bind(self.truck_id)
            .bind(self.status)
            .bind(self.distance)
            .bind(self.client_name.clone())
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Driver => Some("driver_id"),
            Reference::Truck => Some("truck_id"),
            Reference::Trip => None,
        }
    }
}
