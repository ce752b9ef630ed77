//! Services module
//!
//! Este módulo contiene la lógica de negocio de la API: variación de
//! telemetría, proyección de ROI y el asistente por palabras clave.

pub mod assistant_service;
pub mod jitter;
pub mod roi_service;
pub mod telemetry_service;

pub use assistant_service::{AssistantBank, QueryTopic};
pub use jitter::add_random_variation;
pub use roi_service::{calculate_roi, project_roi};
