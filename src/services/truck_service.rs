//! Servicio de camiones
//!
//! Alta con estado por defecto ACTIVE, reemplazo completo de campos y
//! borrado lógico.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::page_dto::PageResponse;
use crate::dto::truck_dto::{TruckRequest, TruckResponse};
use crate::models::{Record, RecordMeta, StatusEnum, Truck, TruckStatus};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TruckService {
    repository: Arc<dyn Repository<Truck>>,
}

impl TruckService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.trucks.clone(),
        }
    }

    /// Crear un camión
    pub async fn create(&self, request: TruckRequest) -> AppResult<TruckResponse> {
        let status = TruckStatus::parse_or(request.status.as_deref(), TruckStatus::Active)?;

        let truck = Truck {
            id: Uuid::new_v4(),
            plate_number: request.plate_number.trim().to_string(),
            model: request.model,
            status,
            capacity: request.capacity,
            year: request.year,
            mileage: request.mileage,
            meta: RecordMeta::new(),
        };

        let truck = self.repository.insert(truck).await?;
        info!("✅ Camión creado: {} ({})", truck.plate_number, truck.id);
        Ok(truck.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TruckResponse> {
        debug!("🔍 Buscando camión {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(TruckResponse::from)
            .ok_or_else(|| not_found_error(Truck::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<TruckResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(TruckResponse::from).into())
    }

    /// Reemplazar los campos de un camión; sin `status` se conserva el actual
    pub async fn update(&self, id: Uuid, request: TruckRequest) -> AppResult<TruckResponse> {
        let status = request
            .status
            .as_deref()
            .map(TruckStatus::parse)
            .transpose()?;

        let change: RecordChange<Truck> = Box::new(move |truck: &mut Truck| {
            truck.plate_number = request.plate_number.trim().to_string();
            truck.model = request.model;
            truck.capacity = request.capacity;
            truck.year = request.year;
            truck.mileage = request.mileage;
            if let Some(status) = status {
                truck.status = status;
            }
            Ok(())
        });

        let truck = self.repository.modify(id, change).await?;
        info!("✅ Camión actualizado: {} ({})", truck.plate_number, truck.id);
        Ok(truck.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Camión eliminado: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn request(plate: &str, status: Option<&str>) -> TruckRequest {
        TruckRequest {
            plate_number: plate.to_string(),
            model: "Volvo FH16".to_string(),
            status: status.map(str::to_string),
            capacity: Some(24000.0),
            year: Some(2021),
            mileage: Some(120000.0),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let service = TruckService::new(&FleetStore::in_memory());

        let truck = service.create(request("AB-123-CD", None)).await.unwrap();
        assert_eq!(truck.status, TruckStatus::Active);
        assert!(truck.updated_at.is_none());

        let truck = service
            .create(request("EF-456-GH", Some("maintenance")))
            .await
            .unwrap();
        assert_eq!(truck.status, TruckStatus::Maintenance);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let service = TruckService::new(&FleetStore::in_memory());
        let err = service
            .create(request("AB-123-CD", Some("parked")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_status_when_omitted() {
        let service = TruckService::new(&FleetStore::in_memory());
        let created = service
            .create(request("AB-123-CD", Some("INACTIVE")))
            .await
            .unwrap();

        let mut changes = request("AB-123-CD", None);
        changes.mileage = Some(130500.0);
        let updated = service.update(created.id, changes).await.unwrap();

        assert_eq!(updated.status, TruckStatus::Inactive);
        assert_eq!(updated.mileage, Some(130500.0));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_deleted_truck_is_not_found() {
        let service = TruckService::new(&FleetStore::in_memory());
        let created = service.create(request("AB-123-CD", None)).await.unwrap();

        service.delete(created.id).await.unwrap();

        assert!(matches!(service.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(created.id).await, Err(AppError::NotFound(_))));
        assert_eq!(
            service.list(PageRequest::default()).await.unwrap().total_elements,
            0
        );
    }

    #[tokio::test]
    async fn test_duplicate_plate_conflicts_until_deleted() {
        let service = TruckService::new(&FleetStore::in_memory());
        let first = service.create(request("AB-123-CD", None)).await.unwrap();

        let err = service.create(request("AB-123-CD", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        service.delete(first.id).await.unwrap();
        assert!(service.create(request("AB-123-CD", None)).await.is_ok());
    }
}
