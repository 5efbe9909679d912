//! Modelo de Truck
//!
//! Mapea a la tabla `trucks`. La matrícula es única entre registros vivos.

use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta};
use crate::models::status::TruckStatus;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

/// Camión de la flota
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Truck {
    pub id: Uuid,
    pub plate_number: String,
    pub model: String,
    pub status: TruckStatus,
    pub capacity: Option<f64>,
    #[sqlx(rename = "model_year")]
    pub year: Option<i32>,
    pub mileage: Option<f64>,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for Truck {
    const RESOURCE: &'static str = "Truck";

    fn id(&self) -> Uuid {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("plate number", self.plate_number.clone())]
    }
}

impl PgRecord for Truck {
    const TABLE: &'static str = "trucks";
    const COLUMNS: &'static [&'static str] = &[
        "plate_number",
        "model",
        "status",
        "capacity",
        "model_year",
        "mileage",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.plate_number.clone())
            .bind(self.model.clone())
            .bind(self.status)
            .bind(self.capacity)
            .bind(self.year)
            .bind(self.mileage)
    }
}
