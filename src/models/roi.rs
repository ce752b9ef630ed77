//! Modelo del calculador de ROI
//!
//! Entradas validadas del formulario y proyección resultante.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para calcular el ROI de la suscripción
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    /// Con 0 camiones el coste anual sería 0 y el ROI indefinido
    #[validate(range(min = 1, message = "trucks must be at least 1"))]
    pub trucks: i64,

    #[validate(range(min = 0.0, message = "monthlyFuelCost must not be negative"))]
    pub monthly_fuel_cost: f64,

    #[validate(range(min = 0, message = "accidentsPerYear must not be negative"))]
    pub accidents_per_year: i64,
}

/// Desglose mensual del ahorro y coste anual de la suscripción
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoiBreakdown {
    pub fuel_savings: i64,
    /// Parte mensual del ahorro por accidentes evitados
    pub accident_savings: i64,
    pub maintenance_savings: i64,
    /// Coste anual de la suscripción
    pub total_cost: i64,
}

/// Proyección de ahorro, todos los importes redondeados al entero
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub monthly_savings: i64,
    pub annual_savings: i64,
    pub net_savings: i64,
    /// Porcentaje
    pub roi: i64,
    pub breakdown: RoiBreakdown,
}
