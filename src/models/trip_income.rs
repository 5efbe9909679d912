//! Modelo de TripIncome
//!
//! Ingreso facturado por un viaje, con su estado de cobro.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::record::{Record, RecordMeta, Reference};
use crate::models::status::PaymentStatus;
use crate::repositories::postgres::{PgQueryAs, PgRecord};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TripIncome {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub client_name: Option<String>,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

impl TripIncome {
    /// Cambiar el estado de cobro; al pasar a PAID sin fecha se registra hoy.
    /// Un ingreso no cobrado nunca conserva `paid_date`.
    pub fn apply_payment_status(&mut self, status: PaymentStatus, today: NaiveDate) {
        self.payment_status = status;
        match status {
            PaymentStatus::Paid => {
                if self.paid_date.is_none() {
                    self.paid_date = Some(today);
                }
            }
            _ => self.paid_date = None,
        }
    }
}

impl Record for TripIncome {
    const RESOURCE: &'static str = "TripIncome";

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
            Reference::Trip => Some(self.trip_id),
            _ => None,
        }
    }
}

impl PgRecord for TripIncome {
    const TABLE: &'static str = "trip_incomes";
    const COLUMNS: &'static [&'static str] = &[
        "trip_id",
        "client_name",
        "amount",
        "payment_status",
        "due_date",
        "paid_date",
    ];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.trip_id)
            .bind(self.client_name.clone())
            .bind(self.amount)
            .bind(self.payment_status)
            .bind(self.due_date)
            .bind(self.paid_date)
    }

    fn reference_column(reference: Reference) -> Option<&'static str> {
        match reference {
            Reference::Trip => Some("trip_id"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(paid_date: Option<NaiveDate>) -> TripIncome {
        TripIncome {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            client_name: None,
            amount: Decimal::new(500, 0),
            payment_status: PaymentStatus::Pending,
            due_date: None,
            paid_date,
            meta: RecordMeta::new(),
        }
    }

    #[test]
    fn test_paid_sets_paid_date_when_missing() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut record = income(None);
        record.apply_payment_status(PaymentStatus::Paid, today);
        assert_eq!(record.payment_status, PaymentStatus::Paid);
        assert_eq!(record.paid_date, Some(today));
    }

    #[test]
    fn test_paid_keeps_existing_paid_date() {
        let earlier = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut record = income(Some(earlier));
        record.apply_payment_status(PaymentStatus::Paid, today);
        assert_eq!(record.paid_date, Some(earlier));
    }

    #[test]
    fn test_overdue_leaves_paid_date_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut record = income(None);
        record.apply_payment_status(PaymentStatus::Overdue, today);
        assert!(record.paid_date.is_none());
    }

    #[test]
    fn test_leaving_paid_clears_paid_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut record = income(None);
        record.apply_payment_status(PaymentStatus::Paid, today);
        assert_eq!(record.paid_date, Some(today));

        record.apply_payment_status(PaymentStatus::Pending, today);
        assert_eq!(record.payment_status, PaymentStatus::Pending);
        assert!(record.paid_date.is_none());

        let mut stale = income(Some(today));
        stale.apply_payment_status(PaymentStatus::Overdue, today);
        assert!(stale.paid_date.is_none());
    }
}
