//! Modelo de Analytics
//!
//! Este módulo contiene las métricas agregadas de la flota y las series
//! temporales que alimentan los gráficos del dashboard.

use serde::{Deserialize, Serialize};

/// Ahorro estimado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostSavings {
    pub monthly: u64,
    pub annual: u64,
}

/// Métricas globales de la flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_vehicles: u32,
    pub active_vehicles: u32,
    /// km recorridos hoy
    pub total_distance: u64,
    /// km/L
    pub fuel_efficiency: f64,
    pub safety_score: u32,
    pub monthly_fuel_cost: u64,
    /// Porcentaje de reducción de accidentes
    pub accident_reduction: u32,
    pub cost_savings: CostSavings,
}

impl Analytics {
    pub fn is_consistent(&self) -> bool {
        self.active_vehicles <= self.total_vehicles
    }
}

/// Punto de una serie temporal diaria
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint<T> {
    pub date: String,
    pub value: T,
}

impl<T> TimeSeriesPoint<T> {
    pub fn new(date: &str, value: T) -> Self {
        Self {
            date: date.to_string(),
            value,
        }
    }
}

/// Desglose del ahorro mensual por concepto
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavingsBreakdown {
    pub fuel: u64,
    pub maintenance: u64,
    pub insurance: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySavings {
    pub monthly: u64,
    pub breakdown: SavingsBreakdown,
}

/// Series temporales de la última semana
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// km/L
    pub fuel_efficiency: Vec<TimeSeriesPoint<f64>>,
    pub safety_scores: Vec<TimeSeriesPoint<u32>>,
    pub cost_savings: MonthlySavings,
}
