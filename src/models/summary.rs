//! 模型概览
//!
//! `/api/models` 的响应：模型名到记录数的有序映射。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Map;

/// 单个模型的记录数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCount {
    pub name: String,
    pub count: u64,
}

/// 模型概览，保持上游顺序
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ModelSummary {
    entries: Vec<ModelCount>,
}

impl ModelSummary {
    pub fn new(entries: Vec<ModelCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ModelCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ModelSummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let count = value.as_u64().ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "count for model `{}` is not a non-negative integer: {}",
                    name, value
                ))
            })?;
            entries.push(ModelCount { name, count });
        }
        Ok(Self { entries })
    }
}
