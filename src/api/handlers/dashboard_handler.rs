use axum::{
    Json,
    extract::{Query, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::{api::app_state::AppState, error::AppError, routing::Route, view};

/// 输出格式
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Deserialize, Default)]
pub struct DashboardParams {
    #[serde(default)]
    pub format: RenderFormat,
}

/// 仪表盘页面
///
/// Handles every path under the dashboard root; the route table decides
/// which view, if any, the path maps to.
pub async fn dashboard_page(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<DashboardParams>,
) -> Result<Response, AppError> {
    let route = Route::resolve(uri.path())
        .ok_or_else(|| AppError::NotFound(format!("No dashboard view for {}", uri.path())))?;
    debug!("Resolved {} to {:?}", uri.path(), route);

    let view = match state.dashboard_service.render(&route).await {
        Ok(view) => view,
        Err(e) => {
            if matches!(e, AppError::Fetch(_) | AppError::Decode(_)) {
                state.metrics.record_upstream_error();
            }
            return Err(e);
        }
    };
    state.metrics.record_page_rendered();

    let response = match params.format {
        RenderFormat::Html => Html(view::render_page(&state.page, &route, &view)).into_response(),
        RenderFormat::Json => Json(serde_json::json!({
            "route": route,
            "view": view,
        }))
        .into_response(),
    };
    Ok(response)
}
