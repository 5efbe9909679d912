//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: valores por
//! defecto, parseo de estados, mapeo registro -> DTO y el agregado del panel.

pub mod dashboard_service;
pub mod driver_service;
pub mod fuel_record_service;
pub mod maintenance_record_service;
pub mod trip_expense_service;
pub mod trip_income_service;
pub mod trip_service;
pub mod truck_service;

pub use dashboard_service::{compute_dashboard_stats, DashboardService, FleetSnapshot};
pub use driver_service::DriverService;
pub use fuel_record_service::FuelRecordService;
pub use maintenance_record_service::MaintenanceRecordService;
pub use trip_expense_service::TripExpenseService;
pub use trip_income_service::TripIncomeService;
pub use trip_service::TripService;
pub use truck_service::TruckService;
