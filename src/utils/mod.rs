//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y formato de
//! marcas de tiempo.

pub mod errors;
pub mod time;

pub use errors::*;
pub use time::*;
