//! Dataset de la flota simulada
//!
//! Este módulo define el dataset completo (vehículos, conductores, rutas,
//! métricas y compliance), el dataset integrado de la demo y su validación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{
    Analytics, ComplianceCounts, ComplianceStatus, CostSavings, Driver, Location, Route,
    TrafficLevel, Vehicle, VehicleStatus,
};

/// Dataset completo, tal como se lee de un fichero JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetDataset {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub routes: Vec<Route>,
    pub analytics: Analytics,
    pub compliance: ComplianceStatus,
}

impl FleetDataset {
    /// Dataset integrado de la demo FleetPulse
    pub fn builtin(loaded_at: DateTime<Utc>) -> Self {
        Self {
            vehicles: vec![
                Vehicle {
                    id: "MH-12-AB-1234".to_string(),
                    driver: "Rajesh Kumar".to_string(),
                    status: VehicleStatus::Active,
                    location: Location {
                        lat: 19.0760,
                        lng: 72.8777,
                        address: "Mumbai, Maharashtra".to_string(),
                    },
                    speed: 45,
                    fuel: 75,
                    last_update: loaded_at,
                },
                Vehicle {
                    id: "GJ-01-CD-5678".to_string(),
                    driver: "Amit Patel".to_string(),
                    status: VehicleStatus::Active,
                    location: Location {
                        lat: 23.0225,
                        lng: 72.5714,
                        address: "Ahmedabad, Gujarat".to_string(),
                    },
                    speed: 60,
                    fuel: 45,
                    last_update: loaded_at,
                },
                Vehicle {
                    id: "DL-03-EF-9012".to_string(),
                    driver: "Priya Sharma".to_string(),
                    status: VehicleStatus::Inactive,
                    location: Location {
                        lat: 28.7041,
                        lng: 77.1025,
                        address: "Delhi".to_string(),
                    },
                    speed: 0,
                    fuel: 90,
                    last_update: loaded_at,
                },
            ],
            drivers: vec![
                Driver {
                    id: "D001".to_string(),
                    name: "Rajesh Kumar".to_string(),
                    safety_score: 98,
                    total_distance: 15420,
                    violations: 0,
                    rating: 4.9,
                },
                Driver {
                    id: "D002".to_string(),
                    name: "Amit Patel".to_string(),
                    safety_score: 92,
                    total_distance: 12350,
                    violations: 1,
                    rating: 4.7,
                },
                Driver {
                    id: "D003".to_string(),
                    name: "Priya Sharma".to_string(),
                    safety_score: 96,
                    total_distance: 8900,
                    violations: 0,
                    rating: 4.8,
                },
            ],
            routes: vec![
                Route {
                    id: "R001".to_string(),
                    name: "Mumbai to Pune Express".to_string(),
                    distance: 148,
                    estimated_time: "3h 30m".to_string(),
                    traffic: TrafficLevel::Moderate,
                    fuel_cost: 2800,
                },
                Route {
                    id: "R002".to_string(),
                    name: "Delhi to Agra Highway".to_string(),
                    distance: 233,
                    estimated_time: "4h 15m".to_string(),
                    traffic: TrafficLevel::Heavy,
                    fuel_cost: 4200,
                },
            ],
            analytics: Analytics {
                total_vehicles: 28,
                active_vehicles: 25,
                total_distance: 1247,
                fuel_efficiency: 6.2,
                safety_score: 94,
                monthly_fuel_cost: 245000,
                accident_reduction: 40,
                cost_savings: CostSavings {
                    monthly: 47500,
                    annual: 570000,
                },
            },
            compliance: ComplianceStatus {
                permits: ComplianceCounts::new(25, 3, 0),
                insurance: ComplianceCounts::new(27, 1, 0),
                maintenance: ComplianceCounts::new(24, 4, 0),
            },
        }
    }

    /// Verificar los invariantes del dataset antes de servirlo
    pub fn validate(&self) -> Result<(), String> {
        let mut vehicle_ids = HashSet::new();
        for vehicle in &self.vehicles {
            if !vehicle_ids.insert(vehicle.id.as_str()) {
                return Err(format!("duplicate vehicle id '{}'", vehicle.id));
            }
            if !vehicle.is_consistent() {
                return Err(format!(
                    "inactive vehicle '{}' reports speed {}",
                    vehicle.id, vehicle.speed
                ));
            }
            if vehicle.fuel > 100 {
                return Err(format!(
                    "vehicle '{}' has fuel {} above 100%",
                    vehicle.id, vehicle.fuel
                ));
            }
        }

        let mut driver_ids = HashSet::new();
        for driver in &self.drivers {
            if !driver_ids.insert(driver.id.as_str()) {
                return Err(format!("duplicate driver id '{}'", driver.id));
            }
            if !driver.is_within_ranges() {
                return Err(format!("driver '{}' has out-of-range scores", driver.id));
            }
        }

        let mut route_ids = HashSet::new();
        for route in &self.routes {
            if !route_ids.insert(route.id.as_str()) {
                return Err(format!("duplicate route id '{}'", route.id));
            }
            if route.distance == 0 {
                return Err(format!("route '{}' has zero distance", route.id));
            }
        }

        if !self.analytics.is_consistent() {
            return Err(format!(
                "activeVehicles {} exceeds totalVehicles {}",
                self.analytics.active_vehicles, self.analytics.total_vehicles
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let dataset = FleetDataset::builtin(Utc::now());
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.vehicles.len(), 3);
        assert_eq!(dataset.drivers.len(), 3);
        assert_eq!(dataset.routes.len(), 2);
    }

    #[test]
    fn test_duplicate_vehicle_is_rejected() {
        let mut dataset = FleetDataset::builtin(Utc::now());
        let copy = dataset.vehicles[0].clone();
        dataset.vehicles.push(copy);
        let err = dataset.validate().unwrap_err();
        assert!(err.contains("MH-12-AB-1234"));
    }

    #[test]
    fn test_moving_inactive_vehicle_is_rejected() {
        let mut dataset = FleetDataset::builtin(Utc::now());
        dataset.vehicles[2].speed = 30;
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_active_above_total_is_rejected() {
        let mut dataset = FleetDataset::builtin(Utc::now());
        dataset.analytics.active_vehicles = 40;
        assert!(dataset.validate().unwrap_err().contains("activeVehicles"));
    }

    #[test]
    fn test_dataset_serializes_in_api_shape() {
        let dataset = FleetDataset::builtin(Utc::now());
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["compliance"]["maintenance"]["expiring"], 4);
        assert_eq!(json["routes"][1]["traffic"], "heavy");
        assert_eq!(json["analytics"]["costSavings"]["annual"], 570000);
    }
}
