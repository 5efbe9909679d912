//! Modelo de Driver
//!
//! Mapea a la tabla `drivers`. El camión asignado es una referencia débil.

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::models::status::DriverStatus;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

/// Conductor
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub assigned_truck_id: Option<Uuid>,
    pub status: DriverStatus,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl Record for Driver {
    const RESOURCE: &'static str = "Driver";

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
            Reference::Truck => self.assigned_truck_id,
            _ => None,
        }
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        let mut keys = vec![("license number", self.license_number.clone())];
        if let Some(email) = &self.email {
            keys.push(("email", email.clone()));
        }
        keys
    }
}

impl PgRecord for Driver {
    const TABLE: &'static str = "drivers";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "license_number",
        "license_expiry",
        "phone",
        "email",
        "assigned_truck_id",
        "status",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.license_number.clone())
            .bind(self.license_expiry)
            .bind(self.phone.clone())
            .bind(self.email.clone())
            .bind(self.assigned_truck_id)
            .bind(self.status)
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Truck => Some("assigned_truck_id"),
            _ => None,
        }
    }
}
