//! 上游模型 API 客户端
//!
//! 只发起 GET 请求，非 2xx 响应与传输失败统一映射为 FetchError。

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{AppError, FetchError, Result};
use crate::models::{ModelSummary, Record};
use crate::routing::Route;

/// 模型 API trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelApi: Send + Sync {
    /// GET /api/models
    async fn fetch_models(&self) -> Result<ModelSummary>;

    /// GET /api/model/{model}
    async fn fetch_records(&self, model: &str) -> Result<Vec<Record>>;

    /// GET /api/model/{model}/{id}
    async fn fetch_record(&self, model: &str, id: &str) -> Result<Record>;
}

/// 基于 reqwest 的实现
pub struct HttpModelApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpModelApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned + Send>(&self, route: &Route) -> Result<T> {
        let url = format!("{}{}", self.base_url, route.api_path());
        let message = route.fetch_error_message();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Upstream request to {} failed: {}", url, e);
            FetchError::new(message).with_detail(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream {} responded with {}", url, status);
            return Err(FetchError::new(message)
                .with_status(status.as_u16())
                .with_detail(format!("upstream responded with {}", status))
                .into());
        }

        let body = response.bytes().await.map_err(|e| {
            FetchError::new(message)
                .with_status(status.as_u16())
                .with_detail(e.to_string())
        })?;

        serde_json::from_slice(&body)
            .map_err(|e| AppError::Decode(format!("{}: {}", route.api_path(), e)))
    }
}

#[async_trait]
impl ModelApi for HttpModelApi {
    async fn fetch_models(&self) -> Result<ModelSummary> {
        self.get_json(&Route::ModelList).await
    }

    async fn fetch_records(&self, model: &str) -> Result<Vec<Record>> {
        self.get_json(&Route::ModelTable {
            model: model.to_string(),
        })
        .await
    }

    async fn fetch_record(&self, model: &str, id: &str) -> Result<Record> {
        self.get_json(&Route::ModelInstance {
            model: model.to_string(),
            id: id.to_string(),
        })
        .await
    }
}

/// 创建模型 API 客户端
pub fn create_model_api(config: &UpstreamConfig) -> Result<Arc<dyn ModelApi>> {
    Ok(Arc::new(HttpModelApi::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpModelApi {
        HttpModelApi::new(&UpstreamConfig {
            base_url: format!("{}/", server.uri()),
            request_timeout: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"User": 3, "Order": 10}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let summary = api_for(&server).fetch_models().await.unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.entries()[0].name, "User");
        assert_eq!(summary.entries()[1].count, 10);
    }

    #[tokio::test]
    async fn test_fetch_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "role": {"id": 2}},
                {"id": 2, "role": null},
            ])))
            .mount(&server)
            .await;

        let records = api_for(&server).fetch_records("user").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("role"), Some(&FieldValue::Null));
    }

    #[tokio::test]
    async fn test_fetch_record_hits_instance_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model/User/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let record = api_for(&server).fetch_record("User", "42").await.unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id"]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = api_for(&server);

        match api.fetch_records("ghost").await {
            Err(AppError::Fetch(e)) => {
                assert_eq!(e.message, "Failed to fetch model data");
                assert_eq!(e.status, Some(404));
            }
            other => panic!("expected fetch error, got {:?}", other),
        }

        match api.fetch_models().await {
            Err(AppError::Fetch(e)) => assert_eq!(e.message, "Failed to fetch models"),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_fetch_error() {
        // Nothing listens on port 1.
        let api = HttpModelApi::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:1".into(),
            request_timeout: 5,
        })
        .unwrap();

        match api.fetch_record("User", "1").await {
            Err(AppError::Fetch(e)) => {
                assert_eq!(e.message, "Failed to fetch model instance data");
                assert_eq!(e.status, None);
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model/User"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let result = api_for(&server).fetch_records("User").await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
