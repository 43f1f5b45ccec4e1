use anyhow::Context;
use modelboard::api::{self, app_state::AppState};
use modelboard::config::ConfigLoader;
use modelboard::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use modelboard::services::{create_dashboard_service, create_model_api};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.app_name, &config.logging);
    info!("Starting Modelboard ({})...", config.environment);
    info!("Configuration loaded successfully");

    let model_api = create_model_api(&config.upstream)?;
    info!("Model API client initialized: {}", config.upstream.base_url);

    let dashboard_service = create_dashboard_service(model_api);
    info!("Dashboard service initialized");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(dashboard_service, config.page.clone(), metrics.clone());
    info!("Application state created");

    // 创建可观测性状态并集成路由
    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        config.upstream.base_url.clone(),
        metrics,
    ));
    let api_router = api::create_router(app_state, &config.server);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("Router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
