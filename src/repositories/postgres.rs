//! Repositorio PostgreSQL genérico
//!
//! Cada modelo declara su tabla y columnas mutables (`PgRecord`); las
//! sentencias se construyen a partir de esa descripción. El predicado de
//! registro vivo se aplica en todas las lecturas.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgArguments, PgPool, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use tracing::debug;
use uuid::Uuid;

use super::{apply_change, Page, PageRequest, RecordChange, RecordFilter, Repository};
use crate::models::record::{Record, Reference};
use crate::utils::errors::{map_database_error, not_found_error, AppError, AppResult};

/// Predicado de registro vivo
pub const LIVE_PREDICATE: &str = "deleted = FALSE";

pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Descripción relacional de un registro
pub trait PgRecord: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;

    /// Columnas mutables, en el mismo orden en que `bind_fields` las enlaza
    const COLUMNS: &'static [&'static str];

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn reference_column(_reference: Reference) -> Option<&'static str> {
        None
    }
}

pub struct PgRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: PgRecord> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Cláusula WHERE del filtro y el identificador a enlazar como $1
    fn filter_clause(filter: RecordFilter) -> AppResult<(String, Option<Uuid>)> {
        match filter {
            RecordFilter::All => Ok((LIVE_PREDICATE.to_string(), None)),
            RecordFilter::Reference(reference, id) => {
                let column = T::reference_column(reference).ok_or_else(|| {
                    AppError::Internal(format!(
                        "{} has no {:?} reference",
                        T::RESOURCE,
                        reference
                    ))
                })?;
                Ok((format!("{} AND {} = $1", LIVE_PREDICATE, column), Some(id)))
            }
        }
    }

    fn insert_sql() -> String {
        let placeholders = (0..T::COLUMNS.len())
            .map(|i| format!("${}", i + 5))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} (id, created_at, updated_at, deleted, {}) VALUES ($1, $2, $3, $4, {}) RETURNING *",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        )
    }

    fn update_sql() -> String {
        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 3))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET updated_at = $2, {} WHERE id = $1 RETURNING *",
            T::TABLE,
            assignments
        )
    }
}

#[async_trait]
impl<T: PgRecord> Repository<T> for PgRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND {}",
            T::TABLE,
            LIVE_PREDICATE
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY created_at DESC",
            T::TABLE,
            LIVE_PREDICATE
        );
        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))
    }

    async fn find_page(&self, filter: RecordFilter, page: PageRequest) -> AppResult<Page<T>> {
        let (clause, reference_id) = Self::filter_clause(filter)?;

        let count_sql = format!("SELECT COUNT(*) FROM {} WHERE {}", T::TABLE, clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(id) = reference_id {
            count_query = count_query.bind(id);
        }
        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        let first_page_param = if reference_id.is_some() { 2 } else { 1 };
        let sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY created_at DESC, id LIMIT ${} OFFSET ${}",
            T::TABLE,
            clause,
            first_page_param,
            first_page_param + 1
        );
        let mut query = sqlx::query_as::<_, T>(&sql);
        if let Some(id) = reference_id {
            query = query.bind(id);
        }
        let items = query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        debug!(
            "📄 {} página {} ({} de {})",
            T::TABLE,
            page.page,
            items.len(),
            total
        );

        Ok(Page::new(items, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn insert(&self, record: T) -> AppResult<T> {
        let sql = Self::insert_sql();
        let meta = record.meta();
        let query = sqlx::query_as::<_, T>(&sql)
            .bind(record.id())
            .bind(meta.created_at)
            .bind(meta.updated_at)
            .bind(meta.deleted);

        record
            .bind_fields(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))
    }

    async fn modify(&self, id: Uuid, change: RecordChange<T>) -> AppResult<T> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        let select_sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND {} FOR UPDATE",
            T::TABLE,
            LIVE_PREDICATE
        );
        let current = sqlx::query_as::<_, T>(&select_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?
            .ok_or_else(|| not_found_error(T::RESOURCE, &id.to_string()))?;

        // Si el cambio falla, la transacción se descarta al salir (rollback)
        let updated = apply_change(&current, change)?;

        let update_sql = Self::update_sql();
        let query = sqlx::query_as::<_, T>(&update_sql)
            .bind(id)
            .bind(updated.meta().updated_at);
        let saved = updated
            .bind_fields(query)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        tx.commit()
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        Ok(saved)
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let sql = format!(
            "UPDATE {} SET deleted = TRUE, updated_at = $2 WHERE id = $1 AND {}",
            T::TABLE,
            LIVE_PREDICATE
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(T::RESOURCE, e))?;

        if result.rows_affected() == 0 {
            return Err(not_found_error(T::RESOURCE, &id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Trip, Truck};

    #[test]
    fn test_insert_sql_places_fields_after_meta() {
        let sql = PgRepository::<Truck>::insert_sql();
        assert!(sql.starts_with(
            "INSERT INTO trucks (id, created_at, updated_at, deleted, plate_number, model, status"
        ));
        assert!(sql.contains("VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"));
        assert!(sql.ends_with("RETURNING *"));
    }

    #[test]
    fn test_update_sql_never_touches_identity_or_tombstone() {
        let sql = PgRepository::<Truck>::update_sql();
        assert!(sql.contains("updated_at = $2, plate_number = $3"));
        assert!(sql.contains("mileage = $8"));
        assert!(!sql.contains("created_at"));
        assert!(!sql.contains("deleted"));
    }

    #[test]
    fn test_reference_filter_clause() {
        let driver_id = Uuid::new_v4();
        let (clause, bound) =
            PgRepository::<Trip>::filter_clause(RecordFilter::Reference(Reference::Driver, driver_id))
                .unwrap();
        assert_eq!(clause, "deleted = FALSE AND driver_id = $1");
        assert_eq!(bound, Some(driver_id));

        let missing = PgRepository::<Truck>::filter_clause(RecordFilter::Reference(
            Reference::Trip,
            driver_id,
        ));
        assert!(missing.is_err());
    }
}
