//! Repositorios de datos
//!
//! La flota es un dataset inmutable en memoria; no hay base de datos.

pub mod dataset;
pub mod mock_fleet_store;

pub use dataset::FleetDataset;
pub use mock_fleet_store::MockFleetStore;
