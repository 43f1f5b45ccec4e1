//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 上游 API 请求失败
///
/// 不区分网络错误、4xx 与 5xx；已知的状态码随错误响应以 `upstream_status` 返回。
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FetchError {
    /// 面向用户的错误消息，例如 "Failed to fetch models"
    pub message: String,
    /// 上游返回的 HTTP 状态码（传输失败时为空）
    pub status: Option<u16>,
    /// 底层错误描述
    pub detail: Option<String>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            detail: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 上游请求失败
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// 上游响应格式错误
    #[error("响应解析失败: {0}")]
    Decode(String),

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let mut body = ErrorResponse::new(&code, &self.to_string());
        if let AppError::Fetch(fetch) = &self {
            if let Some(detail) = &fetch.detail {
                body = body.with_details(detail);
            }
            body.upstream_status = fetch.status;
        }
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 上游响应状态码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            upstream_status: None,
        }
    }

    /// 添加详细信息
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::Fetch(_) => (502, "UPSTREAM_FETCH_FAILED".to_string()),
            AppError::Decode(_) => (502, "UPSTREAM_DECODE_FAILED".to_string()),
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Config(_) => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_displays_message_only() {
        let err: AppError = FetchError::new("Failed to fetch models")
            .with_status(500)
            .into();

        assert_eq!(err.to_string(), "Failed to fetch models");
    }

    #[test]
    fn test_status_mapping() {
        let fetch: AppError = FetchError::new("Failed to fetch model data").into();
        let (status, code) = (&fetch).into();
        assert_eq!(status, 502);
        assert_eq!(code, "UPSTREAM_FETCH_FAILED");

        let (status, _) = (&AppError::NotFound("/admin/x/y/z".into())).into();
        assert_eq!(status, 404);

        let (status, code) = (&AppError::Config("bad".into())).into();
        assert_eq!(status, 500);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::Decode("expected array".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
