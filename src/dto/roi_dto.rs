use serde::Serialize;

use crate::models::RoiProjection;

// Response del calculador de ROI
#[derive(Debug, Serialize)]
pub struct RoiResponse {
    #[serde(flatten)]
    pub projection: RoiProjection,
    pub timestamp: String,
}
