//! API 模块
//!
//! 提供仪表盘页面的 HTTP 接口。

pub mod app_state;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::config::ServerConfig;
use crate::observability::metrics_middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(routes::dashboard_routes::create_dashboard_router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http());

    let router = if server.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(app_state)
}
