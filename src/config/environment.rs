//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Los valores ausentes
//! toman un valor por defecto; los valores mal formados son un error de
//! arranque, nunca un panic.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

use crate::config::database::DatabaseConfig;

/// Errores de configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    /// `None` => almacenamiento en memoria
    pub database: Option<DatabaseConfig>,
}

impl EnvironmentConfig {
    /// Cargar desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar desde una función de búsqueda (permite tests sin tocar el entorno)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let default_level = if environment == "development" {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(DatabaseConfig::from_lookup(url, &lookup)?),
            None => None,
        };

        Ok(Self {
            port: parse_or(&lookup, "PORT", 8600, "a port number")?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins,
            log_level: parse_or(&lookup, "LOG_LEVEL", default_level, "a log level")?,
            database,
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8600,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: Level::DEBUG,
            database: None,
        }
    }
}

/// Parsear una variable opcional con valor por defecto
pub(crate) fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key,
            value,
            expected,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8600);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.is_development());
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.database.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_reads_values() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("DATABASE_URL", "postgres://fleet:secret@db/fleet"),
            ("DATABASE_MAX_CONNECTIONS", "7"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        let database = config.database.unwrap();
        assert_eq!(database.max_connections, 7);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
