//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja la conexión a la base de datos y las migraciones.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Conexión a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("Error conectando a {}", mask_database_url(&config.url)))?;

        info!("✅ PostgreSQL conectado exitosamente");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        info!("🛠️ Aplicando migraciones");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Error aplicando migraciones")?;
        info!("✅ Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };
    let Some(scheme_end) = url.find("://").map(|pos| pos + 3) else {
        return url.to_string();
    };
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
