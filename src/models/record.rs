//! Campos comunes de los registros
//!
//! Todos los registros del sistema comparten marcas de tiempo y la bandera
//! de borrado lógico. Se incrustan por composición en cada modelo.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Marcas de tiempo y borrado lógico de un registro
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RecordMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted: bool,
}

impl RecordMeta {
    /// Metadatos de un registro recién creado
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            updated_at: None,
            deleted: false,
        }
    }

    /// Un registro está vivo mientras no tenga la bandera de borrado
    pub fn is_live(&self) -> bool {
        !self.deleted
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Referencias débiles (sólo por identificador) entre registros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Truck,
    Driver,
    Trip,
}

/// Contrato común de los registros persistidos
pub trait Record: Clone + Send + Sync + 'static {
    /// Nombre del recurso para mensajes de error y logs
    const RESOURCE: &'static str;

    fn id(&self) -> Uuid;

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Identificador referenciado, si el registro tiene esa referencia
    fn reference(&self, _reference: Reference) -> Option<Uuid> {
        None
    }

    /// Pares (campo, valor) que deben ser únicos entre registros vivos
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meta_is_live_and_never_updated() {
        let meta = RecordMeta::new();
        assert!(meta.is_live());
        assert!(meta.updated_at.is_none());
    }

    #[test]
    fn test_touch_sets_updated_at() {
        let mut meta = RecordMeta::new();
        meta.touch();
        let updated = meta.updated_at.expect("touch sets updated_at");
        assert!(updated >= meta.created_at);
    }
}
