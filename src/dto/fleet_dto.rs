use serde::Serialize;

use crate::models::{Analytics, Driver, Route, TimeSeries, Vehicle};

// Response del endpoint raíz
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

// Resumen de flota: métricas variables + vehículos almacenados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverviewResponse<'a> {
    pub analytics: Analytics,
    pub vehicles: &'a [Vehicle],
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<Vehicle>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DriversResponse<'a> {
    pub drivers: &'a [Driver],
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse<'a> {
    pub routes: &'a [Route],
    pub count: usize,
}

// Métricas planas + series temporales
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAnalyticsResponse<'a> {
    #[serde(flatten)]
    pub analytics: &'a Analytics,
    pub time_series: TimeSeries,
    pub last_updated: String,
}
