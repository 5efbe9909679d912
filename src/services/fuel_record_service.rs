//! Servicio de repostajes

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::fuel_record_dto::{FuelRecordRequest, FuelRecordResponse};
use crate::dto::page_dto::PageResponse;
use crate::models::{FuelRecord, Record, RecordMeta, Reference};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct FuelRecordService {
    repository: Arc<dyn Repository<FuelRecord>>,
}

impl FuelRecordService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.fuel_records.clone(),
        }
    }

    pub async fn create(&self, request: FuelRecordRequest) -> AppResult<FuelRecordResponse> {
        let record = FuelRecord {
            id: Uuid::new_v4(),
            truck_id: request.truck_id,
            trip_id: request.trip_id,
            amount: request.amount,
            cost: request.cost,
            date: request.date,
            station: request.station,
            odometer_reading: request.odometer_reading,
            meta: RecordMeta::new(),
        };

        let record = self.repository.insert(record).await?;
        info!(
            "⛽ Repostaje registrado: {} para camión {} ({})",
            record.cost, record.truck_id, record.id
        );
        Ok(record.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<FuelRecordResponse> {
        debug!("🔍 Buscando repostaje {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(FuelRecordResponse::from)
            .ok_or_else(|| not_found_error(FuelRecord::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<FuelRecordResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(FuelRecordResponse::from).into())
    }

    pub async fn list_by_truck(
        &self,
        truck_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<FuelRecordResponse>> {
        let filter = RecordFilter::Reference(Reference::Truck, truck_id);
        let page = self.repository.find_page(filter, page).await?;
        Ok(page.map(FuelRecordResponse::from).into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: FuelRecordRequest,
    ) -> AppResult<FuelRecordResponse> {
        let change: RecordChange<FuelRecord> = Box::new(move |record: &mut FuelRecord| {
            record.truck_id = request.truck_id;
            record.trip_id = request.trip_id;
            record.amount = request.amount;
            record.cost = request.cost;
            record.date = request.date;
            record.station = request.station;
            record.odometer_reading = request.odometer_reading;
            Ok(())
        });

        let record = self.repository.modify(id, change).await?;
        info!("✅ Repostaje actualizado: {}", record.id);
        Ok(record.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Repostaje eliminado: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn request(truck_id: Uuid, cost: i64) -> FuelRecordRequest {
        FuelRecordRequest {
            truck_id,
            trip_id: None,
            amount: 310.5,
            cost: Decimal::new(cost, 2),
            date: Utc::now(),
            station: Some("Repsol A-3 km 42".to_string()),
            odometer_reading: Some(120450.0),
        }
    }

    #[tokio::test]
    async fn test_list_by_truck_only_returns_its_records() {
        let service = FuelRecordService::new(&FleetStore::in_memory());
        let truck_id = Uuid::new_v4();

        service.create(request(truck_id, 45_000)).await.unwrap();
        service.create(request(truck_id, 38_990)).await.unwrap();
        service.create(request(Uuid::new_v4(), 10_000)).await.unwrap();

        let page = service
            .list_by_truck(truck_id, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 2);
        assert!(page.content.iter().all(|record| record.truck_id == truck_id));
    }

    #[tokio::test]
    async fn test_update_replaces_cost() {
        let service = FuelRecordService::new(&FleetStore::in_memory());
        let created = service.create(request(Uuid::new_v4(), 45_000)).await.unwrap();

        let updated = service
            .update(created.id, request(created.truck_id, 47_525))
            .await
            .unwrap();
        assert_eq!(updated.cost, Decimal::new(47_525, 2));
        assert_eq!(updated.created_at, created.created_at);
    }
}
