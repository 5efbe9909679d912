//! Repositorios
//!
//! Frontera de almacenamiento. Toda lectura excluye los registros con
//! borrado lógico; ninguna operación borra filas físicamente.

pub mod memory;
pub mod postgres;
pub mod store;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::record::{Record, Reference};
use crate::utils::errors::{AppError, AppResult};

pub use memory::MemoryRepository;
pub use postgres::PgRepository;
pub use store::{FleetStore, StorageBackend};

/// Tamaño de página por defecto
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Tamaño de página máximo aceptado
pub const MAX_PAGE_SIZE: u32 = 100;

/// Petición de página (base 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Página de resultados
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// Filtro de listados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    All,
    /// Registros cuya referencia débil apunta al identificador dado
    Reference(Reference, Uuid),
}

/// Modificación aplicada dentro de la operación atómica de `modify`
pub type RecordChange<T> = Box<dyn FnOnce(&mut T) -> AppResult<()> + Send>;

/// Operaciones de almacenamiento por tipo de registro
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_page(&self, filter: RecordFilter, page: PageRequest) -> AppResult<Page<T>>;

    async fn insert(&self, record: T) -> AppResult<T>;

    /// Leer, modificar y guardar de forma atómica. `NotFound` si no existe.
    async fn modify(&self, id: Uuid, change: RecordChange<T>) -> AppResult<T>;

    /// Marcar como borrado. `NotFound` si no existe o ya estaba borrado.
    async fn soft_delete(&self, id: Uuid) -> AppResult<()>;
}

/// Aplicar un cambio preservando identidad, fecha de creación y borrado
pub(crate) fn apply_change<T: Record>(current: &T, change: RecordChange<T>) -> AppResult<T> {
    let mut updated = current.clone();
    change(&mut updated)?;

    if updated.id() != current.id() {
        return Err(AppError::Internal(format!(
            "{} update attempted to change the identifier",
            T::RESOURCE
        )));
    }

    let meta = updated.meta_mut();
    meta.created_at = current.meta().created_at;
    meta.deleted = current.meta().deleted;
    meta.touch();

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults_and_clamp() {
        let request = PageRequest::new(None, None);
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);

        assert_eq!(PageRequest::new(Some(2), Some(0)).size, 1);
        assert_eq!(PageRequest::new(Some(2), Some(1000)).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(Some(3), Some(20)).offset(), 60);
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(Some(0), Some(10));
        assert_eq!(Page::<u8>::new(vec![], request, 0).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], request, 10).total_pages(), 1);
        assert_eq!(Page::<u8>::new(vec![], request, 11).total_pages(), 2);
    }
}
