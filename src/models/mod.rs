//! 核心数据模型模块
//!
//! 定义上游模型 API 返回的数据结构：模型概览 ModelSummary 与记录 Record。

pub mod record;
pub mod summary;

pub use record::{Field, FieldValue, Record, Reference, Scalar};
pub use summary::{ModelCount, ModelSummary};
