//! 仪表盘服务
//!
//! 每条路由对应一次上游请求，解码成功后才开始渲染；失败时不产生
//! 任何部分视图。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::routing::Route;
use crate::services::model_api::ModelApi;
use crate::view::{self, View};

/// 仪表盘服务 trait
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// 渲染路由对应的视图
    async fn render(&self, route: &Route) -> Result<View>;

    /// 模型列表视图
    async fn render_model_cards(&self) -> Result<View>;

    /// 模型表格视图
    async fn render_model_table(&self, model: &str) -> Result<View>;

    /// 单条记录视图
    async fn render_model_instance(&self, model: &str, id: &str) -> Result<View>;
}

/// 仪表盘服务实现
pub struct DashboardServiceImpl {
    api: Arc<dyn ModelApi>,
}

impl DashboardServiceImpl {
    pub fn new(api: Arc<dyn ModelApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn render(&self, route: &Route) -> Result<View> {
        debug!("Dispatching {:?}", route);

        let result = match route {
            Route::ModelList => self.render_model_cards().await,
            Route::ModelTable { model } => self.render_model_table(model).await,
            Route::ModelInstance { model, id } => self.render_model_instance(model, id).await,
        };

        if let Err(e) = &result {
            warn!("Rendering {} failed: {}", route.href(), e);
        }
        result
    }

    async fn render_model_cards(&self) -> Result<View> {
        let summary = self.api.fetch_models().await?;
        debug!("Rendering {} model cards", summary.len());
        Ok(view::model_cards(&summary))
    }

    async fn render_model_table(&self, model: &str) -> Result<View> {
        let records = self.api.fetch_records(model).await?;
        debug!("Rendering {} rows for model {}", records.len(), model);
        Ok(view::model_table(&records))
    }

    async fn render_model_instance(&self, model: &str, id: &str) -> Result<View> {
        let record = self.api.fetch_record(model, id).await?;
        debug!("Rendering {} {} with {} fields", model, id, record.len());
        Ok(view::model_instance(&record))
    }
}

/// 创建仪表盘服务
pub fn create_dashboard_service(api: Arc<dyn ModelApi>) -> Box<dyn DashboardService> {
    Box::new(DashboardServiceImpl::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, FetchError};
    use crate::models::{ModelSummary, Record};
    use crate::services::model_api::MockModelApi;
    use crate::view::{Block, Cell};
    use mockall::predicate::eq;
    use serde_json::json;

    fn service(api: MockModelApi) -> DashboardServiceImpl {
        DashboardServiceImpl::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_model_list_route_renders_cards() {
        let mut api = MockModelApi::new();
        api.expect_fetch_models().times(1).returning(|| {
            Ok(serde_json::from_value::<ModelSummary>(json!({"User": 3, "Order": 10})).unwrap())
        });

        let view = service(api).render(&Route::ModelList).await.unwrap();
        assert_eq!(view.mount_point, "model-cards-dashboard");
        assert_eq!(view.blocks.len(), 2);
        assert!(matches!(
            &view.blocks[1],
            Block::Card { href, count: 10, .. } if href == "/admin/dashboard/Order"
        ));
    }

    #[tokio::test]
    async fn test_model_table_route_fetches_model() {
        let mut api = MockModelApi::new();
        api.expect_fetch_records()
            .with(eq("owner"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    serde_json::from_value::<Record>(json!({"id": 1, "owner": {"id": 5}})).unwrap(),
                ])
            });

        let route = Route::ModelTable {
            model: "owner".into(),
        };
        let view = service(api).render(&route).await.unwrap();
        assert_eq!(
            view.blocks[1],
            Block::Row {
                cells: vec![
                    Cell::text("1"),
                    Cell::link("/admin/dashboard/owner/5", "OWNER.5"),
                ],
            }
        );
    }

    #[tokio::test]
    async fn test_model_instance_route_fetches_record() {
        let mut api = MockModelApi::new();
        api.expect_fetch_record()
            .with(eq("User"), eq("42"))
            .times(1)
            .returning(|_, _| Ok(serde_json::from_value::<Record>(json!({"id": 42})).unwrap()));

        let route = Route::resolve("/admin/dashboard/User/42").unwrap();
        let view = service(api).render(&route).await.unwrap();
        assert_eq!(view.mount_point, "model-instance-dashboard");
        assert_eq!(view.blocks.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let mut api = MockModelApi::new();
        api.expect_fetch_records()
            .returning(|_| Err(FetchError::new("Failed to fetch model data").with_status(503).into()));

        let route = Route::ModelTable {
            model: "User".into(),
        };
        let err = service(api).render(&route).await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(ref e) if e.message == "Failed to fetch model data"));
    }
}
