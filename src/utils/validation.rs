//! Utilidades de validación
//!
//! Validadores personalizados usados por los DTOs de entrada
//! (`#[validate(custom = "...")]`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío ni sea sólo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Decimales admitidos en importes (columnas `NUMERIC(14, 2)`)
pub const MONEY_SCALE: u32 = 2;

/// Mayor importe que cabe en `NUMERIC(14, 2)`: 999_999_999_999.99
pub fn max_money_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, MONEY_SCALE)
}

/// Validar que un importe monetario quepa en `NUMERIC(14, 2)` sin redondeo
/// y no sea negativo
pub fn validate_money_amount(value: &Decimal) -> Result<(), ValidationError> {
    let code = if *value < Decimal::ZERO {
        "non_negative"
    } else if value.normalize().scale() > MONEY_SCALE {
        "money_scale"
    } else if *value > max_money_amount() {
        "money_range"
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new(code);
    error.add_param("value".into(), &value.to_string());
    Err(error)
}

/// Validar que un rango de fechas no esté invertido
pub fn validate_date_order(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            let mut error = ValidationError::new("date_order");
            error.add_param("start_date".into(), &start.to_rfc3339());
            error.add_param("end_date".into(), &end.to_rfc3339());
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("ABC-123").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_money_amount() {
        assert!(validate_money_amount(&Decimal::new(1250, 2)).is_ok());
        assert!(validate_money_amount(&Decimal::ZERO).is_ok());
        assert!(validate_money_amount(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_money_scale_is_two_decimals() {
        assert!(validate_money_amount(&Decimal::new(1001, 2)).is_ok());
        // ceros a la derecha no cuentan
        assert!(validate_money_amount(&Decimal::new(10500, 3)).is_ok());

        let err = validate_money_amount(&Decimal::new(10005, 3)).unwrap_err();
        assert_eq!(err.code, "money_scale");
    }

    #[test]
    fn test_money_is_capped_at_column_range() {
        assert!(validate_money_amount(&max_money_amount()).is_ok());

        let above = max_money_amount() + Decimal::new(1, 2);
        let err = validate_money_amount(&above).unwrap_err();
        assert_eq!(err.code, "money_range");

        assert!(validate_money_amount(&Decimal::from(1_000_000_000_000_000u64)).is_err());
        assert!(validate_money_amount(&Decimal::MAX).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let start = Utc::now();
        let end = start + Duration::hours(5);
        assert!(validate_date_order(Some(start), Some(end)).is_ok());
        assert!(validate_date_order(Some(start), None).is_ok());
        assert!(validate_date_order(None, Some(end)).is_ok());
        assert!(validate_date_order(Some(end), Some(start)).is_err());
    }
}
