pub mod ai_dto;
pub mod fleet_dto;
pub mod roi_dto;
