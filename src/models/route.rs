//! Modelo de Route
//!
//! Rutas predefinidas con su estimación de tráfico y coste de combustible.

use serde::{Deserialize, Serialize};

/// Nivel de tráfico de la ruta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    /// km
    pub distance: u32,
    /// Duración legible, p. ej. "3h 30m"
    pub estimated_time: String,
    pub traffic: TrafficLevel,
    pub fuel_cost: u32,
}
