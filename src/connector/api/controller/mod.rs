pub mod compare_controller;
pub mod health_controller;
pub mod price_controller;
