//! Configuración del dataset
//!
//! Este módulo decide de dónde se carga el dataset de la flota: el integrado
//! de la demo o un fichero JSON indicado por `FLEET_DATA_PATH`.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{ConfigError, EnvironmentConfig};
use crate::repositories::FleetDataset;

/// Origen del dataset
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Builtin,
    File(PathBuf),
}

impl DatasetSource {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        match &config.fleet_data_path {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Builtin,
        }
    }

    /// Cargar y validar el dataset
    pub fn load(&self) -> Result<FleetDataset, ConfigError> {
        let dataset = match self {
            DatasetSource::Builtin => {
                info!("📦 Usando dataset integrado de la demo");
                FleetDataset::builtin(Utc::now())
            }
            DatasetSource::File(path) => {
                info!("📂 Cargando dataset desde {}", path.display());
                load_dataset_file(path)?
            }
        };

        dataset.validate().map_err(ConfigError::InvalidDataset)?;
        Ok(dataset)
    }
}

fn load_dataset_file(path: &Path) -> Result<FleetDataset, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::DatasetIo {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::DatasetParse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "fleet_pulse_{}_{}.json",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_source_by_default() {
        let config = EnvironmentConfig::default();
        let source = DatasetSource::from_config(&config);
        assert_eq!(source, DatasetSource::Builtin);
        assert_eq!(source.load().unwrap().vehicles.len(), 3);
    }

    #[test]
    fn test_file_source_loads_json_dataset() {
        let builtin = FleetDataset::builtin(Utc::now());
        let mut json = serde_json::to_value(&builtin).unwrap();
        // lastUpdate es opcional en el fichero
        json["vehicles"][0].as_object_mut().unwrap().remove("lastUpdate");
        json["drivers"][0]["name"] = "Suresh Reddy".into();

        let path = temp_file("valid", &json.to_string());
        let dataset = DatasetSource::File(path.clone()).load().unwrap();
        fs::remove_file(path).ok();

        assert_eq!(dataset.drivers[0].name, "Suresh Reddy");
        assert_eq!(dataset.vehicles.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = DatasetSource::File(PathBuf::from("/nonexistent/fleet.json"));
        assert!(matches!(source.load(), Err(ConfigError::DatasetIo { .. })));
    }

    #[test]
    fn test_broken_json_is_parse_error() {
        let path = temp_file("broken", "{ \"vehicles\": [");
        let result = DatasetSource::File(path.clone()).load();
        fs::remove_file(path).ok();
        assert!(matches!(result, Err(ConfigError::DatasetParse { .. })));
    }

    #[test]
    fn test_invalid_dataset_is_rejected() {
        let mut dataset = FleetDataset::builtin(Utc::now());
        dataset.analytics.active_vehicles = 99;
        let path = temp_file("invalid", &serde_json::to_string(&dataset).unwrap());
        let result = DatasetSource::File(path.clone()).load();
        fs::remove_file(path).ok();
        assert!(matches!(result, Err(ConfigError::InvalidDataset(_))));
    }
}
