//! 服务模块

pub mod dashboard;
pub mod model_api;

pub use dashboard::{DashboardService, DashboardServiceImpl, create_dashboard_service};
pub use model_api::{HttpModelApi, ModelApi, create_model_api};
