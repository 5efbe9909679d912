//! Servicio de viajes
//!
//! Además del CRUD permite cambiar sólo el estado y listar los viajes de un
//! conductor o de un camión. Las transiciones de estado son libres.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::page_dto::PageResponse;
use crate::dto::trip_dto::{TripRequest, TripResponse};
use crate::models::{Record, RecordMeta, Reference, StatusEnum, Trip, TripStatus};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

pub struct TripService {
    repository: Arc<dyn Repository<Trip>>,
}

impl TripService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.trips.clone(),
        }
    }

    /// Crear un viaje (SCHEDULED si no se indica estado)
    pub async fn create(&self, request: TripRequest) -> AppResult<TripResponse> {
        let status = TripStatus::parse_or(request.status.as_deref(), TripStatus::Scheduled)?;

        let trip = Trip {
            id: Uuid::new_v4(),
            origin: request.origin,
            destination: request.destination,
            start_date: request.start_date,
            end_date: request.end_date,
            driver_id: request.driver_id,
            truck_id: request.truck_id,
            status,
            distance: request.distance,
            client_name: request.client_name,
            meta: RecordMeta::new(),
        };

        let trip = self.repository.insert(trip).await?;
        info!(
            "✅ Viaje creado: {} -> {} ({})",
            trip.origin, trip.destination, trip.id
        );
        Ok(trip.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TripResponse> {
        debug!("🔍 Buscando viaje {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(TripResponse::from)
            .ok_or_else(|| not_found_error(Trip::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<TripResponse>> {
        self.list_filtered(RecordFilter::All, page).await
    }

    pub async fn list_by_driver(
        &self,
        driver_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<TripResponse>> {
        self.list_filtered(RecordFilter::Reference(Reference::Driver, driver_id), page)
            .await
    }

    pub async fn list_by_truck(
        &self,
        truck_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<TripResponse>> {
        self.list_filtered(RecordFilter::Reference(Reference::Truck, truck_id), page)
            .await
    }

    async fn list_filtered(
        &self,
        filter: RecordFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<TripResponse>> {
        let page = self.repository.find_page(filter, page).await?;
        Ok(page.map(TripResponse::from).into())
    }

    pub async fn update(&self, id: Uuid, request: TripRequest) -> AppResult<TripResponse> {
        let status = request
            .status
            .as_deref()
            .map(TripStatus::parse)
            .transpose()?;

        let change: RecordChange<Trip> = Box::new(move |trip: &mut Trip| {
            trip.origin = request.origin;
            trip.destination = request.destination;
            trip.start_date = request.start_date;
            trip.end_date = request.end_date;
            trip.driver_id = request.driver_id;
            trip.truck_id = request.truck_id;
            trip.distance = request.distance;
            trip.client_name = request.client_name;
            if let Some(status) = status {
                trip.status = status;
            }
            Ok(())
        });

        let trip = self.repository.modify(id, change).await?;
        info!("✅ Viaje actualizado: {}", trip.id);
        Ok(trip.into())
    }

    /// Cambiar sólo el estado del viaje
    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<TripResponse> {
        let status = TripStatus::parse(status)?;

        let change: RecordChange<Trip> = Box::new(move |trip: &mut Trip| {
            trip.status = status;
            Ok(())
        });

        let trip = self.repository.modify(id, change).await?;
        info!("🔄 Viaje {} ahora en estado {}", trip.id, status.as_str());
        Ok(trip.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Viaje eliminado: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn request(driver_id: Option<Uuid>, truck_id: Option<Uuid>) -> TripRequest {
        TripRequest {
            origin: "Madrid".to_string(),
            destination: "Valencia".to_string(),
            start_date: None,
            end_date: None,
            driver_id,
            truck_id,
            status: None,
            distance: Some(355.0),
            client_name: Some("Frutas del Turia".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_scheduled() {
        let service = TripService::new(&FleetStore::in_memory());
        let trip = service.create(request(None, None)).await.unwrap();
        assert_eq!(trip.status, TripStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_update_status_is_case_insensitive() {
        let service = TripService::new(&FleetStore::in_memory());
        let trip = service.create(request(None, None)).await.unwrap();

        let updated = service.update_status(trip.id, "in_progress").await.unwrap();
        assert_eq!(updated.status, TripStatus::InProgress);
        assert_eq!(updated.origin, "Madrid");

        let err = service.update_status(trip.id, "lost").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_lists_by_driver_and_truck() {
        let service = TripService::new(&FleetStore::in_memory());
        let driver_id = Uuid::new_v4();
        let truck_id = Uuid::new_v4();

        service.create(request(Some(driver_id), Some(truck_id))).await.unwrap();
        service.create(request(Some(driver_id), None)).await.unwrap();
        let other = service.create(request(None, Some(truck_id))).await.unwrap();

        let by_driver = service
            .list_by_driver(driver_id, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(by_driver.total_elements, 2);

        service.delete(other.id).await.unwrap();
        let by_truck = service
            .list_by_truck(truck_id, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(by_truck.total_elements, 1);
    }
}
