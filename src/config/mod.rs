//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la carga del dataset
//! simulado de la flota.

pub mod dataset;
pub mod environment;

pub use dataset::*;
pub use environment::*;

use thiserror::Error;

/// Errores de configuración; abortan el arranque del servidor
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to read dataset '{path}': {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset '{path}': {source}")]
    DatasetParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}
