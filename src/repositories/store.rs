//! Conjunto de repositorios de la flota
//!
//! Agrupa un repositorio por tipo de registro, todos sobre el mismo backend.

use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use super::{MemoryRepository, PgRepository, Repository};
use crate::models::{
    Driver, FuelRecord, MaintenanceRecord, TripExpense, TripIncome, Trip, Truck,
};

/// Backend de almacenamiento activo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Clone)]
pub struct FleetStore {
    pub backend: StorageBackend,
    pub trucks: Arc<dyn Repository<Truck>>,
    pub drivers: Arc<dyn Repository<Driver>>,
    pub trips: Arc<dyn Repository<Trip>>,
    pub fuel_records: Arc<dyn Repository<FuelRecord>>,
    pub maintenance_records: Arc<dyn Repository<MaintenanceRecord>>,
    pub trip_expenses: Arc<dyn Repository<TripExpense>>,
    pub trip_incomes: Arc<dyn Repository<TripIncome>>,
}

impl FleetStore {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            backend: StorageBackend::Postgres,
            trucks: Arc::new(PgRepository::<Truck>::new(pool.clone())),
            drivers: Arc::new(PgRepository::<Driver>::new(pool.clone())),
            trips: Arc::new(PgRepository::<Trip>::new(pool.clone())),
            fuel_records: Arc::new(PgRepository::<FuelRecord>::new(pool.clone())),
            maintenance_records: Arc::new(PgRepository::<MaintenanceRecord>::new(pool.clone())),
            trip_expenses: Arc::new(PgRepository::<TripExpense>::new(pool.clone())),
            trip_incomes: Arc::new(PgRepository::<TripIncome>::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            trucks: Arc::new(MemoryRepository::<Truck>::new()),
            drivers: Arc::new(MemoryRepository::<Driver>::new()),
            trips: Arc::new(MemoryRepository::<Trip>::new()),
            fuel_records: Arc::new(MemoryRepository::<FuelRecord>::new()),
            maintenance_records: Arc::new(MemoryRepository::<MaintenanceRecord>::new()),
            trip_expenses: Arc::new(MemoryRepository::<TripExpense>::new()),
            trip_incomes: Arc::new(MemoryRepository::<TripIncome>::new()),
        }
    }
}
