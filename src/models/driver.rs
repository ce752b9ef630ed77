//! Modelo de Driver
//!
//! Conductores de la flota con sus métricas de seguridad.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    /// 0-100
    pub safety_score: u32,
    /// km acumulados
    pub total_distance: u64,
    pub violations: u32,
    /// 0.0-5.0
    pub rating: f64,
}

impl Driver {
    pub fn is_within_ranges(&self) -> bool {
        self.safety_score <= 100 && (0.0..=5.0).contains(&self.rating)
    }
}
