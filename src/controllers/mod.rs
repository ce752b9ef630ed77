pub mod assistant_controller;
pub mod fleet_controller;
pub mod roi_controller;

pub use assistant_controller::AssistantController;
pub use fleet_controller::FleetController;
pub use roi_controller::RoiController;
