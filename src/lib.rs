//! Modelboard - 通用模型管理仪表盘
//!
//! 从上游模型 API 获取数据，在服务端渲染模型列表、模型表格与单条记录
//! 三种视图。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod routing;
pub mod services;
pub mod view;
