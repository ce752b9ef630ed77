//! Repositorio de la flota simulada
//!
//! `MockFleetStore` es la única fuente de datos de la API. Se construye una
//! vez al arrancar y se comparte en solo lectura; no expone ninguna
//! operación de escritura.

use chrono::{DateTime, Utc};

use super::FleetDataset;
use crate::models::{Analytics, ComplianceStatus, Driver, Route, Vehicle};

#[derive(Debug, Clone)]
pub struct MockFleetStore {
    dataset: FleetDataset,
    loaded_at: DateTime<Utc>,
}

impl MockFleetStore {
    pub fn new(dataset: FleetDataset) -> Self {
        Self {
            dataset,
            loaded_at: Utc::now(),
        }
    }

    /// Store con el dataset integrado, usado por defecto y en tests
    pub fn builtin() -> Self {
        let loaded_at = Utc::now();
        Self {
            dataset: FleetDataset::builtin(loaded_at),
            loaded_at,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.dataset.vehicles
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.dataset.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.dataset.routes
    }

    pub fn analytics(&self) -> &Analytics {
        &self.dataset.analytics
    }

    pub fn compliance(&self) -> &ComplianceStatus {
        &self.dataset.compliance
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_expose_builtin_dataset() {
        let store = MockFleetStore::builtin();
        assert_eq!(store.vehicles()[0].id, "MH-12-AB-1234");
        assert_eq!(store.drivers()[0].name, "Rajesh Kumar");
        assert_eq!(store.routes()[1].name, "Delhi to Agra Highway");
        assert_eq!(store.analytics().total_vehicles, 28);
        assert_eq!(store.compliance().insurance.valid, 27);
    }

    #[test]
    fn test_vehicle_timestamps_match_load_time() {
        let store = MockFleetStore::builtin();
        assert!(store
            .vehicles()
            .iter()
            .all(|v| v.last_update == store.loaded_at()));
    }

    #[test]
    fn test_reads_return_same_data() {
        let store = MockFleetStore::builtin();
        let first = store.drivers().to_vec();
        let second = store.drivers().to_vec();
        assert_eq!(first, second);
    }
}
