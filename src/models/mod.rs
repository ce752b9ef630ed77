//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de la flota simulada tal como
//! se serializan en la API (camelCase).

pub mod analytics;
pub mod compliance;
pub mod driver;
pub mod roi;
pub mod route;
pub mod vehicle;

pub use analytics::*;
pub use compliance::*;
pub use driver::*;
pub use roi::*;
pub use route::*;
pub use vehicle::*;
