//! Repositorio en memoria
//!
//! Almacenamiento en proceso para desarrollo sin base de datos y para los
//! tests. Cada escritura se hace bajo un único lock de escritura, así que
//! la comprobación de unicidad y el guardado son atómicos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{apply_change, Page, PageRequest, RecordChange, RecordFilter, Repository};
use crate::models::record::Record;
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

pub struct MemoryRepository<T> {
    records: RwLock<HashMap<Uuid, T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn matches(record: &T, filter: RecordFilter) -> bool {
        if !record.meta().is_live() {
            return false;
        }
        match filter {
            RecordFilter::All => true,
            RecordFilter::Reference(reference, id) => record.reference(reference) == Some(id),
        }
    }

    /// Más recientes primero, igual que el `ORDER BY` de PostgreSQL
    fn sorted_live(records: &HashMap<Uuid, T>, filter: RecordFilter) -> Vec<T> {
        let mut live: Vec<T> = records
            .values()
            .filter(|record| Self::matches(record, filter))
            .cloned()
            .collect();
        live.sort_by(|a, b| {
            b.meta()
                .created_at
                .cmp(&a.meta().created_at)
                .then_with(|| a.id().cmp(&b.id()))
        });
        live
    }

    fn check_unique(records: &HashMap<Uuid, T>, candidate: &T) -> AppResult<()> {
        for (field, value) in candidate.unique_keys() {
            let taken = records.values().any(|other| {
                other.id() != candidate.id()
                    && other.meta().is_live()
                    && other
                        .unique_keys()
                        .iter()
                        .any(|(other_field, other_value)| *other_field == field && *other_value == value)
            });
            if taken {
                return Err(conflict_error(T::RESOURCE, field, &value));
            }
        }
        Ok(())
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records
            .get(&id)
            .filter(|record| record.meta().is_live())
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        let records = self.records.read().await;
        Ok(Self::sorted_live(&records, RecordFilter::All))
    }

    async fn find_page(&self, filter: RecordFilter, page: PageRequest) -> AppResult<Page<T>> {
        let records = self.records.read().await;
        let live = Self::sorted_live(&records, filter);
        let total = live.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items: Vec<T> = live
            .into_iter()
            .skip(offset)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(items, page, total))
    }

    async fn insert(&self, record: T) -> AppResult<T> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id()) {
            return Err(conflict_error(T::RESOURCE, "id", &record.id().to_string()));
        }
        Self::check_unique(&records, &record)?;
        records.insert(record.id(), record.clone());
        debug!("💾 {} {} guardado en memoria", T::RESOURCE, record.id());
        Ok(record)
    }

    async fn modify(&self, id: Uuid, change: RecordChange<T>) -> AppResult<T> {
        let mut records = self.records.write().await;
        let current = records
            .get(&id)
            .filter(|record| record.meta().is_live())
            .ok_or_else(|| not_found_error(T::RESOURCE, &id.to_string()))?;

        let updated = apply_change(current, change)?;
        Self::check_unique(&records, &updated)?;
        records.insert(id, updated.clone());
        Ok(updated)
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) if record.meta().is_live() => {
                let meta = record.meta_mut();
                meta.deleted = true;
                meta.touch();
                debug!("🗑️ {} {} marcado como borrado", T::RESOURCE, id);
                Ok(())
            }
            _ => Err(not_found_error(T::RESOURCE, &id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordMeta, Truck, TruckStatus};
    use crate::utils::errors::AppError;

    fn truck(plate: &str) -> Truck {
        Truck {
            id: Uuid::new_v4(),
            plate_number: plate.to_string(),
            model: "Volvo FH16".to_string(),
            status: TruckStatus::Active,
            capacity: Some(40.0),
            year: Some(2021),
            mileage: Some(120_000.0),
            meta: RecordMeta::new(),
        }
    }

    #[tokio::test]
    async fn test_soft_deleted_records_are_invisible() {
        let repo = MemoryRepository::<Truck>::new();
        let saved = repo.insert(truck("AB-123")).await.unwrap();

        repo.soft_delete(saved.id).await.unwrap();

        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
        let page = repo
            .find_page(RecordFilter::All, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 0);

        let again = repo.soft_delete(saved.id).await.unwrap_err();
        assert!(matches!(again, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unique_keys_only_among_live_records() {
        let repo = MemoryRepository::<Truck>::new();
        let first = repo.insert(truck("AB-123")).await.unwrap();

        let duplicate = repo.insert(truck("AB-123")).await.unwrap_err();
        assert!(matches!(duplicate, AppError::Conflict(_)));

        repo.soft_delete(first.id).await.unwrap();
        assert!(repo.insert(truck("AB-123")).await.is_ok());
    }

    #[tokio::test]
    async fn test_modify_preserves_identity_and_creation() {
        let repo = MemoryRepository::<Truck>::new();
        let saved = repo.insert(truck("AB-123")).await.unwrap();

        let updated = repo
            .modify(
                saved.id,
                Box::new(|t: &mut Truck| {
                    t.model = "Scania R500".to_string();
                    t.meta.deleted = true;
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.model, "Scania R500");
        assert_eq!(updated.meta.created_at, saved.meta.created_at);
        assert!(updated.meta.updated_at.is_some());
        assert!(!updated.meta.deleted);
    }

    #[tokio::test]
    async fn test_failed_change_leaves_record_untouched() {
        let repo = MemoryRepository::<Truck>::new();
        let saved = repo.insert(truck("AB-123")).await.unwrap();

        let err = repo
            .modify(
                saved.id,
                Box::new(|t: &mut Truck| {
                    t.model = "changed".to_string();
                    Err(AppError::InvalidArgument("nope".to_string()))
                }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));

        let stored = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored.model, "Volvo FH16");
    }

    #[tokio::test]
    async fn test_modify_unknown_id_is_not_found() {
        let repo = MemoryRepository::<Truck>::new();
        let err = repo
            .modify(Uuid::new_v4(), Box::new(|_t: &mut Truck| Ok(())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_pages_report_totals() {
        let repo = MemoryRepository::<Truck>::new();
        for i in 0..5 {
            repo.insert(truck(&format!("PL-{}", i))).await.unwrap();
        }

        let page = repo
            .find_page(RecordFilter::All, PageRequest::new(Some(1), Some(2)))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 3);

        let last = repo
            .find_page(RecordFilter::All, PageRequest::new(Some(2), Some(2)))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
    }
}
