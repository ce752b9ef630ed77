//! FleetPulse API
//!
//! API simulada del dashboard de FleetPulse: dataset inmutable de flota,
//! telemetría con variación aleatoria, asistente por palabras clave y
//! calculador de ROI.

pub mod api;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use api::create_app;
pub use state::AppState;
