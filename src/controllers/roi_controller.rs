use crate::dto::roi_dto::RoiResponse;
use crate::models::RoiInputs;
use crate::services::roi_service;
use crate::utils::errors::AppError;
use crate::utils::time::now_iso;

pub struct RoiController;

impl RoiController {
    pub fn calculate(&self, inputs: RoiInputs) -> Result<RoiResponse, AppError> {
        let projection = roi_service::calculate_roi(&inputs)?;
        Ok(RoiResponse {
            projection,
            timestamp: now_iso(),
        })
    }
}
