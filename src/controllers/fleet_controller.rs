use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

use crate::dto::fleet_dto::{
    DriversResponse, FleetAnalyticsResponse, FleetOverviewResponse, RoutesResponse,
    StatusResponse, VehiclesResponse,
};
use crate::models::ComplianceStatus;
use crate::repositories::MockFleetStore;
use crate::services::telemetry_service;
use crate::utils::time::now_iso;

#[derive(Clone)]
pub struct FleetController {
    store: Arc<MockFleetStore>,
}

impl FleetController {
    pub fn new(store: Arc<MockFleetStore>) -> Self {
        Self { store }
    }

    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            message: "FleetPulse API is running!",
            timestamp: now_iso(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Resumen: distancia y vehículos activos varían, los vehículos no
    pub fn overview<R: Rng>(&self, rng: &mut R) -> FleetOverviewResponse<'_> {
        FleetOverviewResponse {
            analytics: telemetry_service::live_analytics(rng, self.store.analytics()),
            vehicles: self.store.vehicles(),
            last_updated: now_iso(),
        }
    }

    pub fn vehicles<R: Rng>(&self, rng: &mut R) -> VehiclesResponse {
        let vehicles = telemetry_service::live_vehicles(rng, self.store.vehicles(), Utc::now());
        VehiclesResponse {
            count: vehicles.len(),
            vehicles,
        }
    }

    pub fn drivers(&self) -> DriversResponse<'_> {
        let drivers = self.store.drivers();
        DriversResponse {
            drivers,
            count: drivers.len(),
        }
    }

    pub fn routes(&self) -> RoutesResponse<'_> {
        let routes = self.store.routes();
        RoutesResponse {
            routes,
            count: routes.len(),
        }
    }

    pub fn compliance(&self) -> &ComplianceStatus {
        self.store.compliance()
    }

    pub fn analytics(&self) -> FleetAnalyticsResponse<'_> {
        let analytics = self.store.analytics();
        FleetAnalyticsResponse {
            analytics,
            time_series: telemetry_service::weekly_time_series(analytics),
            last_updated: now_iso(),
        }
    }
}
