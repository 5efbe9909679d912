//! Enumeraciones de estado y clasificador
//!
//! Cada enumeración mapea a un ENUM de PostgreSQL y se parsea desde texto
//! sin distinguir mayúsculas. Un valor desconocido es `InvalidArgument`,
//! nunca un valor por defecto silencioso.

use serde::{Deserialize, Serialize};
use sqlx::Type;

use crate::utils::errors::{invalid_argument_error, AppResult};

/// Enumeraciones con representación textual fija
pub trait StatusEnum: Sized + Copy + PartialEq + 'static {
    /// Nombre del campo para los mensajes de error
    const FIELD: &'static str;

    /// Tabla texto canónico -> variante
    const VARIANTS: &'static [(&'static str, Self)];

    /// Parsear texto libre (se ignoran espacios y mayúsculas)
    fn parse(input: &str) -> AppResult<Self> {
        let normalized = input.trim().to_uppercase();
        Self::VARIANTS
            .iter()
            .find(|(text, _)| *text == normalized)
            .map(|(_, variant)| *variant)
            .ok_or_else(|| invalid_argument_error(Self::FIELD, input, &Self::allowed()))
    }

    /// Parsear un campo opcional, aplicando el valor por defecto si falta
    fn parse_or(input: Option<&str>, default: Self) -> AppResult<Self> {
        match input {
            Some(text) => Self::parse(text),
            None => Ok(default),
        }
    }

    fn as_str(&self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(text, _)| *text)
            .unwrap_or_default()
    }

    fn allowed() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|(text, _)| *text).collect()
    }
}

/// Estado del camión - mapea al ENUM truck_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "truck_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruckStatus {
    Active,
    Maintenance,
    Inactive,
}

impl StatusEnum for TruckStatus {
    const FIELD: &'static str = "truck status";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ACTIVE", Self::Active),
        ("MAINTENANCE", Self::Maintenance),
        ("INACTIVE", Self::Inactive),
    ];
}

impl TruckStatus {
    pub fn is_active(&self) -> bool {
        *self == Self::Active
    }
}

/// Estado del conductor - mapea al ENUM driver_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "driver_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Available,
    OnTrip,
    OffDuty,
}

impl StatusEnum for DriverStatus {
    const FIELD: &'static str = "driver status";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("AVAILABLE", Self::Available),
        ("ON_TRIP", Self::OnTrip),
        ("OFF_DUTY", Self::OffDuty),
    ];
}

impl DriverStatus {
    pub fn is_available(&self) -> bool {
        *self == Self::Available
    }
}

/// Estado del viaje - mapea al ENUM trip_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "trip_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl StatusEnum for TripStatus {
    const FIELD: &'static str = "trip status";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("SCHEDULED", Self::Scheduled),
        ("IN_PROGRESS", Self::InProgress),
        ("COMPLETED", Self::Completed),
        ("CANCELLED", Self::Cancelled),
    ];
}

impl TripStatus {
    pub fn is_in_progress(&self) -> bool {
        *self == Self::InProgress
    }
}

/// Tipo de mantenimiento - mapea al ENUM maintenance_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "maintenance_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceType {
    Routine,
    Repair,
    Inspection,
    Emergency,
}

impl StatusEnum for MaintenanceType {
    const FIELD: &'static str = "maintenance type";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ROUTINE", Self::Routine),
        ("REPAIR", Self::Repair),
        ("INSPECTION", Self::Inspection),
        ("EMERGENCY", Self::Emergency),
    ];
}

/// Tipo de gasto de viaje - mapea al ENUM expense_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "expense_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Fuel,
    Toll,
    Repair,
    Food,
    Lodging,
    Other,
}

impl StatusEnum for ExpenseType {
    const FIELD: &'static str = "expense type";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("FUEL", Self::Fuel),
        ("TOLL", Self::Toll),
        ("REPAIR", Self::Repair),
        ("FOOD", Self::Food),
        ("LODGING", Self::Lodging),
        ("OTHER", Self::Other),
    ];
}

/// Estado de cobro de un ingreso - mapea al ENUM payment_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "payment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl StatusEnum for PaymentStatus {
    const FIELD: &'static str = "payment status";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("PAID", Self::Paid),
        ("PENDING", Self::Pending),
        ("OVERDUE", Self::Overdue),
    ];
}

impl PaymentStatus {
    pub fn is_pending(&self) -> bool {
        *self == Self::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TruckStatus::parse("active").unwrap(), TruckStatus::Active);
        assert_eq!(TruckStatus::parse("ACTIVE").unwrap(), TruckStatus::Active);
        assert_eq!(TruckStatus::parse(" Active ").unwrap(), TruckStatus::Active);
        assert_eq!(TripStatus::parse("in_progress").unwrap(), TripStatus::InProgress);
        assert_eq!(DriverStatus::parse("Off_Duty").unwrap(), DriverStatus::OffDuty);
    }

    #[test]
    fn test_unknown_text_is_invalid_argument() {
        let err = PaymentStatus::parse("refunded").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(err.to_string().contains("PAID, PENDING, OVERDUE"));

        assert!(matches!(
            MaintenanceType::parse("").unwrap_err(),
            AppError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_parse_or_applies_default_only_when_missing() {
        assert_eq!(
            DriverStatus::parse_or(None, DriverStatus::Available).unwrap(),
            DriverStatus::Available
        );
        assert_eq!(
            DriverStatus::parse_or(Some("on_trip"), DriverStatus::Available).unwrap(),
            DriverStatus::OnTrip
        );
        assert!(DriverStatus::parse_or(Some("sleeping"), DriverStatus::Available).is_err());
    }

    #[test]
    fn test_as_str_round_trips_with_serde_name() {
        for (text, variant) in ExpenseType::VARIANTS {
            assert_eq!(variant.as_str(), *text);
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, serde_json::Value::String(text.to_string()));
        }
    }

    #[test]
    fn test_classifier_predicates() {
        assert!(TruckStatus::Active.is_active());
        assert!(!TruckStatus::Maintenance.is_active());
        assert!(TripStatus::InProgress.is_in_progress());
        assert!(!TripStatus::Scheduled.is_in_progress());
        assert!(DriverStatus::Available.is_available());
        assert!(!DriverStatus::OnTrip.is_available());
        assert!(PaymentStatus::Pending.is_pending());
        assert!(!PaymentStatus::Overdue.is_pending());
    }
}
