//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se expone en la API
//! de telemetría simulada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Inactive,
}

impl VehicleStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, VehicleStatus::Active)
    }
}

/// Posición GPS del vehículo con dirección legible
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Vehicle principal - matrícula, conductor y última lectura de telemetría
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Matrícula (formato indio, p. ej. `MH-12-AB-1234`)
    pub id: String,
    pub driver: String,
    pub status: VehicleStatus,
    pub location: Location,
    /// km/h
    pub speed: u32,
    /// Porcentaje 0-100
    pub fuel: u32,
    /// Al cargar un dataset sin este campo se usa la hora de carga
    #[serde(with = "crate::utils::time::iso_millis", default = "Utc::now")]
    pub last_update: DateTime<Utc>,
}

impl Vehicle {
    /// Un vehículo inactivo no puede reportar velocidad
    pub fn is_consistent(&self) -> bool {
        self.status.is_active() || self.speed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: VehicleStatus, speed: u32) -> Vehicle {
        Vehicle {
            id: "KA-05-MN-4321".to_string(),
            driver: "Test Driver".to_string(),
            status,
            location: Location {
                lat: 12.9716,
                lng: 77.5946,
                address: "Bengaluru, Karnataka".to_string(),
            },
            speed,
            fuel: 50,
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(VehicleStatus::Inactive).unwrap();
        assert_eq!(json, "inactive");
    }

    #[test]
    fn test_vehicle_uses_camel_case_fields() {
        let json = serde_json::to_value(sample(VehicleStatus::Active, 40)).unwrap();
        assert!(json.get("lastUpdate").is_some());
        assert!(json.get("last_update").is_none());
        assert_eq!(json["location"]["address"], "Bengaluru, Karnataka");
    }

    #[test]
    fn test_inactive_vehicle_with_speed_is_inconsistent() {
        assert!(sample(VehicleStatus::Inactive, 0).is_consistent());
        assert!(!sample(VehicleStatus::Inactive, 12).is_consistent());
        assert!(sample(VehicleStatus::Active, 12).is_consistent());
    }
}
