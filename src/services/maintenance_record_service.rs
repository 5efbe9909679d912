//! Servicio de mantenimientos

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::maintenance_record_dto::{MaintenanceRecordRequest, MaintenanceRecordResponse};
use crate::dto::page_dto::PageResponse;
use crate::models::{MaintenanceRecord, MaintenanceType, Record, RecordMeta, Reference, StatusEnum};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct MaintenanceRecordService {
    repository: Arc<dyn Repository<MaintenanceRecord>>,
}

impl MaintenanceRecordService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.maintenance_records.clone(),
        }
    }

    pub async fn create(
        &self,
        request: MaintenanceRecordRequest,
    ) -> AppResult<MaintenanceRecordResponse> {
        let maintenance_type = MaintenanceType::parse(&request.maintenance_type)?;

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            truck_id: request.truck_id,
            maintenance_type,
            description: request.description,
            cost: request.cost,
            date: request.date,
            next_due_date: request.next_due_date,
            vendor: request.vendor,
            meta: RecordMeta::new(),
        };

        let record = self.repository.insert(record).await?;
        info!(
            "🔧 Mantenimiento {} registrado para camión {} ({})",
            record.maintenance_type.as_str(),
            record.truck_id,
            record.id
        );
        Ok(record.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<MaintenanceRecordResponse> {
        debug!("🔍 Buscando mantenimiento {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(MaintenanceRecordResponse::from)
            .ok_or_else(|| not_found_error(MaintenanceRecord::RESOURCE, &id.to_string()))
    }

    pub async fn list(
        &self,
        page: PageRequest,
    ) -> AppResult<PageResponse<MaintenanceRecordResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(MaintenanceRecordResponse::from).into())
    }

    pub async fn list_by_truck(
        &self,
        truck_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<MaintenanceRecordResponse>> {
        let filter = RecordFilter::Reference(Reference::Truck, truck_id);
        let page = self.repository.find_page(filter, page).await?;
        Ok(page.map(MaintenanceRecordResponse::from).into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: MaintenanceRecordRequest,
    ) -> AppResult<MaintenanceRecordResponse> {
        let maintenance_type = MaintenanceType::parse(&request.maintenance_type)?;

        let change: RecordChange<MaintenanceRecord> =
            Box::new(move |record: &mut MaintenanceRecord| {
                record.truck_id = request.truck_id;
                record.maintenance_type = maintenance_type;
                record.description = request.description;
                record.cost = request.cost;
                record.date = request.date;
                record.next_due_date = request.next_due_date;
                record.vendor = request.vendor;
                Ok(())
            });

        let record = self.repository.modify(id, change).await?;
        info!("✅ Mantenimiento actualizado: {}", record.id);
        Ok(record.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Mantenimiento eliminado: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn request(maintenance_type: &str) -> MaintenanceRecordRequest {
        MaintenanceRecordRequest {
            truck_id: Uuid::new_v4(),
            maintenance_type: maintenance_type.to_string(),
            description: Some("Cambio de aceite y filtros".to_string()),
            cost: Decimal::new(32_000, 2),
            date: Utc::now(),
            next_due_date: None,
            vendor: Some("Talleres Norte".to_string()),
        }
    }

    #[tokio::test]
    async fn test_type_is_parsed_case_insensitively() {
        let service = MaintenanceRecordService::new(&FleetStore::in_memory());
        let record = service.create(request("routine")).await.unwrap();
        assert_eq!(record.maintenance_type, MaintenanceType::Routine);
    }

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let service = MaintenanceRecordService::new(&FleetStore::in_memory());
        let err = service.create(request("cosmetic")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let service = MaintenanceRecordService::new(&FleetStore::in_memory());
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
