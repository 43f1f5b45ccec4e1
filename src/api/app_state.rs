use crate::config::PageConfig;
use crate::observability::AppMetrics;
use crate::services::dashboard::DashboardService;
use std::sync::Arc;

/// Application state shared by the dashboard handlers
#[derive(Clone)]
pub struct AppState {
    /// Dashboard service for fetch + render
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Host page settings
    pub page: Arc<PageConfig>,
    /// Request and render counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dashboard_service", &"Arc<dyn DashboardService>")
            .field("page", &self.page)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        dashboard_service: Box<dyn DashboardService>,
        page: PageConfig,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            dashboard_service: Arc::from(dashboard_service),
            page: Arc::new(page),
            metrics,
        }
    }
}
