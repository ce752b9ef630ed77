//! Utilidades de fecha y hora
//!
//! Todas las marcas de tiempo de la API son RFC 3339 en UTC con
//! milisegundos y sufijo `Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formatear una fecha en el formato de la API
pub fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Marca de tiempo actual
pub fn now_iso() -> String {
    to_iso(&Utc::now())
}

/// Serde con el mismo formato, para campos `DateTime<Utc>`
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
