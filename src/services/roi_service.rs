//! Servicio del calculador de ROI
//!
//! Proyección pura del ahorro que obtiene una flota con la suscripción.
//! No hace I/O y es determinista.

use validator::Validate;

use crate::models::{RoiBreakdown, RoiInputs, RoiProjection};
use crate::utils::errors::AppResult;

/// 15% de ahorro en combustible
pub const FUEL_SAVINGS_RATE: f64 = 0.15;
/// Coste medio de un accidente (₹)
pub const ACCIDENT_COST: f64 = 50_000.0;
/// 40% menos accidentes
pub const ACCIDENT_REDUCTION_RATE: f64 = 0.40;
/// ₹8k de mantenimiento ahorrado por camión y mes
pub const MAINTENANCE_SAVINGS_PER_TRUCK: f64 = 8_000.0;
/// ₹700 de suscripción por camión y mes
pub const COST_PER_TRUCK_MONTHLY: f64 = 700.0;

/// Validar las entradas y calcular la proyección
pub fn calculate_roi(inputs: &RoiInputs) -> AppResult<RoiProjection> {
    inputs.validate()?;
    Ok(project_roi(inputs))
}

/// Fórmula de ROI. Requiere `trucks >= 1` para que el coste anual no sea 0.
pub fn project_roi(inputs: &RoiInputs) -> RoiProjection {
    let trucks = inputs.trucks as f64;

    let fuel_savings = inputs.monthly_fuel_cost * FUEL_SAVINGS_RATE;
    let accident_savings_annual =
        inputs.accidents_per_year as f64 * ACCIDENT_COST * ACCIDENT_REDUCTION_RATE;
    let accident_savings_monthly = accident_savings_annual / 12.0;
    let maintenance_savings = trucks * MAINTENANCE_SAVINGS_PER_TRUCK;

    let monthly_savings = fuel_savings + accident_savings_monthly + maintenance_savings;
    let annual_savings = monthly_savings * 12.0;
    let annual_cost = trucks * COST_PER_TRUCK_MONTHLY * 12.0;
    let net_savings = annual_savings - annual_cost;
    let roi = net_savings / annual_cost * 100.0;

    RoiProjection {
        monthly_savings: round(monthly_savings),
        annual_savings: round(annual_savings),
        net_savings: round(net_savings),
        roi: round(roi),
        breakdown: RoiBreakdown {
            fuel_savings: round(fuel_savings),
            accident_savings: round(accident_savings_monthly),
            maintenance_savings: round(maintenance_savings),
            total_cost: round(annual_cost),
        },
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}
