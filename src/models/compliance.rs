//! Modelo de Compliance
//!
//! Estado documental de la flota: permisos, seguros y mantenimiento.

use serde::{Deserialize, Serialize};

/// Contadores de documentos por estado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ComplianceCounts {
    pub valid: u32,
    pub expiring: u32,
    pub expired: u32,
}

impl ComplianceCounts {
    pub fn new(valid: u32, expiring: u32, expired: u32) -> Self {
        Self {
            valid,
            expiring,
            expired,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceStatus {
    pub permits: ComplianceCounts,
    pub insurance: ComplianceCounts,
    pub maintenance: ComplianceCounts,
}
