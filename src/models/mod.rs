//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL (ver `migrations/`).

pub mod driver;
pub mod fuel_record;
pub mod maintenance_record;
pub mod record;
pub mod status;
pub mod trip;
pub mod trip_expense;
pub mod trip_income;
pub mod truck;

pub use driver::Driver;
pub use fuel_record::FuelRecord;
pub use maintenance_record::MaintenanceRecord;
pub use record::{Record, RecordMeta, Reference};
pub use status::{
    DriverStatus, ExpenseType, MaintenanceType, PaymentStatus, StatusEnum, TripStatus, TruckStatus,
};
pub use trip::Trip;
pub use trip_expense::TripExpense;
pub use trip_income::TripIncome;
pub use truck::Truck;
