//! Servicio de gastos de viaje

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::page_dto::PageResponse;
use crate::dto::trip_expense_dto::{TripExpenseRequest, TripExpenseResponse};
use crate::models::{ExpenseType, Record, RecordMeta, Reference, StatusEnum, TripExpense};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TripExpenseService {
    repository: Arc<dyn Repository<TripExpense>>,
}

impl TripExpenseService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.trip_expenses.clone(),
        }
    }

    pub async fn create(&self, request: TripExpenseRequest) -> AppResult<TripExpenseResponse> {
        let expense_type = ExpenseType::parse(&request.expense_type)?;

        let expense = TripExpense {
            id: Uuid::new_v4(),
            trip_id: request.trip_id,
            expense_type,
            description: request.description,
            amount: request.amount,
            date: request.date,
            meta: RecordMeta::new(),
        };

        let expense = self.repository.insert(expense).await?;
        info!(
            "💸 Gasto {} de {} registrado para viaje {}",
            expense.expense_type.as_str(),
            expense.amount,
            expense.trip_id
        );
        Ok(expense.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TripExpenseResponse> {
        debug!("🔍 Buscando gasto {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(TripExpenseResponse::from)
            .ok_or_else(|| not_found_error(TripExpense::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<TripExpenseResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(TripExpenseResponse::from).into())
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<TripExpenseResponse>> {
        let filter = RecordFilter::Reference(Reference::Trip, trip_id);
        let page = self.repository.find_page(filter, page).await?;
        Ok(page.map(TripExpenseResponse::from).into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: TripExpenseRequest,
    ) -> AppResult<TripExpenseResponse> {
        let expense_type = ExpenseType::parse(&request.expense_type)?;

        let change: RecordChange<TripExpense> = Box::new(move |expense: &mut TripExpense| {
            expense.trip_id = request.trip_id;
            expense.expense_type = expense_type;
            expense.description = request.description;
            expense.amount = request.amount;
            expense.date = request.date;
            Ok(())
        });

        let expense = self.repository.modify(id, change).await?;
        info!("✅ Gasto actualizado: {}", expense.id);
        Ok(expense.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Gasto eliminado: {}", id);
        Ok(())
    }
}
