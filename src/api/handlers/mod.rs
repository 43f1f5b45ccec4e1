//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod dashboard_handler;

pub use dashboard_handler::*;
