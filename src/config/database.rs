//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool PostgreSQL con SQLx.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::environment::{parse_or, ConfigError};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
            run_migrations: true,
        }
    }

    pub(crate) fn from_lookup<F>(url: String, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new(url);
        Ok(Self {
            max_connections: parse_or(
                lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
                "a positive integer",
            )?,
            min_connections: parse_or(
                lookup,
                "DATABASE_MIN_CONNECTIONS",
                defaults.min_connections,
                "a positive integer",
            )?,
            connect_timeout: Duration::from_secs(parse_or(
                lookup,
                "DATABASE_CONNECT_TIMEOUT",
                defaults.connect_timeout.as_secs(),
                "a number of seconds",
            )?),
            run_migrations: parse_or(lookup, "RUN_MIGRATIONS", true, "true or false")?,
            ..defaults
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}
