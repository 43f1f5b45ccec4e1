//! 视图模块
//!
//! 渲染器把上游数据转换为可序列化的视图树，HTML 输出与 HTTP 响应
//! 是唯一有副作用的边界。

pub mod html;
pub mod page;
pub mod render;

use serde::Serialize;

pub use page::render_page;
pub use render::{field_cell, model_cards, model_instance, model_table};

/// 挂载到一个容器中的完整视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// 容器元素 ID
    pub mount_point: &'static str,
    /// 容器的全部子元素，整体替换容器内容
    pub blocks: Vec<Block>,
}

impl View {
    pub fn new(mount_point: &'static str) -> Self {
        Self {
            mount_point,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// 容器子元素
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// 模型卡片：链接到模型表格，并显示记录数
    Card {
        href: String,
        label: String,
        count: u64,
    },
    /// 表头：每个字段名一个强调标签
    Header { labels: Vec<String> },
    /// 数据行：字段单元依次拼接
    Row { cells: Vec<Cell> },
}

/// 行内单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Link { href: String, label: String },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Cell::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    /// 单元的可见文本
    pub fn label(&self) -> &str {
        match self {
            Cell::Text { text } => text,
            Cell::Link { label, .. } => label,
        }
    }
}
