//! Servicio de ingresos de viaje
//!
//! Los ingresos nacen PENDING salvo que se indique otro estado. Al pasar a
//! PAID sin fecha de cobro se registra la fecha de hoy (UTC).

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::page_dto::PageResponse;
use crate::dto::trip_income_dto::{TripIncomeRequest, TripIncomeResponse};
use crate::models::{PaymentStatus, Record, RecordMeta, Reference, StatusEnum, TripIncome};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TripIncomeService {
    repository: Arc<dyn Repository<TripIncome>>,
}

impl TripIncomeService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.trip_incomes.clone(),
        }
    }

    pub async fn create(&self, request: TripIncomeRequest) -> AppResult<TripIncomeResponse> {
        let payment_status =
            PaymentStatus::parse_or(request.payment_status.as_deref(), PaymentStatus::Pending)?;

        let mut income = TripIncome {
            id: Uuid::new_v4(),
            trip_id: request.trip_id,
            client_name: request.client_name,
            amount: request.amount,
            payment_status,
            due_date: request.due_date,
            paid_date: request.paid_date,
            meta: RecordMeta::new(),
        };
        income.apply_payment_status(payment_status, Utc::now().date_naive());

        let income = self.repository.insert(income).await?;
        info!(
            "💰 Ingreso de {} registrado para viaje {} ({})",
            income.amount,
            income.trip_id,
            income.payment_status.as_str()
        );
        Ok(income.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TripIncomeResponse> {
        debug!("🔍 Buscando ingreso {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(TripIncomeResponse::from)
            .ok_or_else(|| not_found_error(TripIncome::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<TripIncomeResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(TripIncomeResponse::from).into())
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<TripIncomeResponse>> {
        let filter = RecordFilter::Reference(Reference::Trip, trip_id);
        let page = self.repository.find_page(filter, page).await?;
        Ok(page.map(TripIncomeResponse::from).into())
    }

    /// Reemplazar los campos; sin `paymentStatus` se conserva el actual
    pub async fn update(
        &self,
        id: Uuid,
        request: TripIncomeRequest,
    ) -> AppResult<TripIncomeResponse> {
        let payment_status = request
            .payment_status
            .as_deref()
            .map(PaymentStatus::parse)
            .transpose()?;
        let today = Utc::now().date_naive();

        let change: RecordChange<TripIncome> = Box::new(move |income: &mut TripIncome| {
            income.trip_id = request.trip_id;
            income.client_name = request.client_name;
            income.amount = request.amount;
            income.due_date = request.due_date;
            income.paid_date = request.paid_date;
            let status = payment_status.unwrap_or(income.payment_status);
            income.apply_payment_status(status, today);
            Ok(())
        });

        let income = self.repository.modify(id, change).await?;
        info!("✅ Ingreso actualizado: {}", income.id);
        Ok(income.into())
    }

    /// Cambiar sólo el estado de cobro
    pub async fn update_payment_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> AppResult<TripIncomeResponse> {
        let status = PaymentStatus::parse(status)?;
        let today = Utc::now().date_naive();

        let change: RecordChange<TripIncome> = Box::new(move |income: &mut TripIncome| {
            income.apply_payment_status(status, today);
            Ok(())
        });

        let income = self.repository.modify(id, change).await?;
        info!("🔄 Ingreso {} ahora {}", income.id, status.as_str());
        Ok(income.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Ingreso eliminado: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use rust_decimal::Decimal;

    fn request(status: Option<&str>) -> TripIncomeRequest {
        TripIncomeRequest {
            trip_id: Uuid::new_v4(),
            client_name: Some("Logística Ibérica".to_string()),
            amount: Decimal::new(500, 0),
            payment_status: status.map(str::to_string),
            due_date: None,
            paid_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_pending() {
        let service = TripIncomeService::new(&FleetStore::in_memory());
        let income = service.create(request(None)).await.unwrap();
        assert_eq!(income.payment_status, PaymentStatus::Pending);
        assert!(income.paid_date.is_none());
    }

    #[tokio::test]
    async fn test_create_as_paid_records_today() {
        let service = TripIncomeService::new(&FleetStore::in_memory());
        let income = service.create(request(Some("paid"))).await.unwrap();
        assert_eq!(income.payment_status, PaymentStatus::Paid);
        assert_eq!(income.paid_date, Some(Utc::now().date_naive()));
    }

    #[tokio::test]
    async fn test_update_payment_status_to_paid() {
        let service = TripIncomeService::new(&FleetStore::in_memory());
        let income = service.create(request(None)).await.unwrap();

        let paid = service
            .update_payment_status(income.id, "PAID")
            .await
            .unwrap();
        assert_eq!(paid.payment_status, PaymentStatus::Paid);
        assert!(paid.paid_date.is_some());
        assert_eq!(paid.amount, income.amount);
    }

    #[tokio::test]
    async fn test_back_to_pending_clears_paid_date() {
        let service = TripIncomeService::new(&FleetStore::in_memory());
        let income = service.create(request(Some("PAID"))).await.unwrap();
        assert!(income.paid_date.is_some());

        let pending = service
            .update_payment_status(income.id, "pending")
            .await
            .unwrap();
        assert_eq!(pending.payment_status, PaymentStatus::Pending);
        assert!(pending.paid_date.is_none());
    }

    #[tokio::test]
    async fn test_update_payment_status_unknown_id() {
        let service = TripIncomeService::new(&FleetStore::in_memory());
        let err = service
            .update_payment_status(Uuid::new_v4(), "overdue")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
