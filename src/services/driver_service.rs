//! Servicio de conductores

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::driver_dto::{DriverRequest, DriverResponse};
use crate::dto::page_dto::PageResponse;
use crate::models::{Driver, DriverStatus, Record, RecordMeta, StatusEnum};
use crate::repositories::{FleetStore, PageRequest, RecordChange, RecordFilter, Repository};
use crate::utils::errors::{not_found_error, AppResult};

fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
}

pub struct DriverService {
    repository: Arc<dyn Repository<Driver>>,
}

impl DriverService {
    pub fn new(store: &FleetStore) -> Self {
        Self {
            repository: store.drivers.clone(),
        }
    }

    /// Crear un conductor (AVAILABLE si no se indica estado)
    pub async fn create(&self, request: DriverRequest) -> AppResult<DriverResponse> {
        let status = DriverStatus::parse_or(request.status.as_deref(), DriverStatus::Available)?;

        let driver = Driver {
            id: Uuid::new_v4(),
            first_name: request.first_name,
            last_name: request.last_name,
            license_number: request.license_number.trim().to_string(),
            license_expiry: request.license_expiry,
            phone: request.phone,
            email: normalize_email(request.email),
            assigned_truck_id: request.assigned_truck_id,
            status,
            meta: RecordMeta::new(),
        };

        let driver = self.repository.insert(driver).await?;
        info!(
            "✅ Conductor creado: {} {} ({})",
            driver.first_name, driver.last_name, driver.id
        );
        Ok(driver.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<DriverResponse> {
        debug!("🔍 Buscando conductor {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(DriverResponse::from)
            .ok_or_else(|| not_found_error(Driver::RESOURCE, &id.to_string()))
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<DriverResponse>> {
        let page = self.repository.find_page(RecordFilter::All, page).await?;
        Ok(page.map(DriverResponse::from).into())
    }

    pub async fn update(&self, id: Uuid, request: DriverRequest) -> AppResult<DriverResponse> {
        let status = request
            .status
            .as_deref()
            .map(DriverStatus::parse)
            .transpose()?;

        let change: RecordChange<Driver> = Box::new(move |driver: &mut Driver| {
            driver.first_name = request.first_name;
            driver.last_name = request.last_name;
            driver.license_number = request.license_number.trim().to_string();
            driver.license_expiry = request.license_expiry;
            driver.phone = request.phone;
            driver.email = normalize_email(request.email);
            driver.assigned_truck_id = request.assigned_truck_id;
            if let Some(status) = status {
                driver.status = status;
            }
            Ok(())
        });

        let driver = self.repository.modify(id, change).await?;
        info!("✅ Conductor actualizado: {}", driver.id);
        Ok(driver.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.soft_delete(id).await?;
        info!("🗑️ Conductor eliminado: {}", id);
        Ok(())
    }
}
