//! DTOs de la API
//!
//! Contrato JSON (camelCase) de requests y responses.

pub mod dashboard_dto;
pub mod driver_dto;
pub mod fuel_record_dto;
pub mod health_dto;
pub mod maintenance_record_dto;
pub mod page_dto;
pub mod trip_dto;
pub mod trip_expense_dto;
pub mod trip_income_dto;
pub mod truck_dto;
