//! Dashboard Routes
//!
//! 定义仪表盘页面路由。

use crate::api::handlers::dashboard_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::routing::DASHBOARD_ROOT;

/// 创建仪表盘路由器
pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route(DASHBOARD_ROOT, get(dashboard_page))
        .route(&format!("{}/*rest", DASHBOARD_ROOT), get(dashboard_page))
}
