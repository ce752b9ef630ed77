//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables son opcionales; los valores inválidos abortan el arranque.

use std::env;
use std::path::PathBuf;

use super::ConfigError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Prefijo bajo el que se monta la API, p. ej. `/api`
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    /// Dataset alternativo en JSON; sin él se usa el dataset integrado
    pub fleet_data_path: Option<PathBuf>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            api_prefix: "/api".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::DEBUG,
            fleet_data_path: None,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        let host = lookup("HOST").unwrap_or(defaults.host);

        let api_prefix = match lookup("API_PREFIX") {
            Some(raw) => normalize_prefix(&raw)?,
            None => defaults.api_prefix,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let log_level: tracing::Level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "LOG_LEVEL",
                value: raw.clone(),
            })?,
            None if environment == "development" => tracing::Level::DEBUG,
            None => tracing::Level::INFO,
        };

        let fleet_data_path = lookup("FLEET_DATA_PATH")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            port,
            host,
            api_prefix,
            cors_origins,
            log_level,
            fleet_data_path,
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

/// El prefijo debe empezar por `/`; la barra final se elimina.
/// Un prefijo vacío o `/` monta la API en la raíz.
fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            key: "API_PREFIX",
            value: raw.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<EnvironmentConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_prefix, "/api");
        assert!(config.is_development());
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert!(config.fleet_data_path.is_none());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_production_defaults_to_info_logging() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("CORS_ORIGINS", "https://fleetpulse.in, https://app.fleetpulse.in,"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(
            config.cors_origins,
            vec!["https://fleetpulse.in", "https://app.fleetpulse.in"]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let err = config_from(&[("LOG_LEVEL", "loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "LOG_LEVEL", .. }));
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(normalize_prefix("/v1/").unwrap(), "/v1");
        assert_eq!(normalize_prefix("/").unwrap(), "");
        assert!(normalize_prefix("api").is_err());
    }
}
