//! 纯渲染函数
//!
//! 输入为已解码的上游数据，输出为视图树，不做任何 I/O。

use crate::models::{Field, FieldValue, ModelSummary, Record};
use crate::routing::{Route, RouteKind};
use crate::view::{Block, Cell, View};

/// 模型列表：每个模型一张卡片
pub fn model_cards(summary: &ModelSummary) -> View {
    let mut view = View::new(RouteKind::ModelList.mount_point());
    for entry in summary.entries() {
        let route = Route::ModelTable {
            model: entry.name.clone(),
        };
        view.push(Block::Card {
            href: route.href(),
            label: entry.name.clone(),
            count: entry.count,
        });
    }
    view
}

/// 模型表格：表头取自第一条记录，之后每条记录一行
///
/// Later records with a different field set still render all of their own
/// fields; only the header is fixed by the first record.
pub fn model_table(records: &[Record]) -> View {
    let mut view = View::new(RouteKind::ModelTable.mount_point());
    let Some(first) = records.first() else {
        return view;
    };

    view.push(header(first));
    for record in records {
        view.push(row(record));
    }
    view
}

/// 单条记录：表头加一行
pub fn model_instance(record: &Record) -> View {
    let mut view = View::new(RouteKind::ModelInstance.mount_point());
    view.push(header(record));
    view.push(row(record));
    view
}

/// 渲染单个字段
///
/// 引用字段链接到以字段名为模型名的实例页；无 id 的引用与空值
/// 渲染为 `{KEY}.NONE`。
pub fn field_cell(field: &Field) -> Cell {
    let key = field.name.to_uppercase();
    match &field.value {
        FieldValue::Reference(reference) => match &reference.id {
            Some(id) => {
                let target = Route::ModelInstance {
                    model: field.name.clone(),
                    id: id.clone(),
                };
                Cell::link(target.href(), format!("{}.{}", key, id))
            }
            None => Cell::text(format!("{}.NONE", key)),
        },
        FieldValue::Null => Cell::text(format!("{}.NONE", key)),
        FieldValue::Scalar(scalar) => Cell::text(scalar.to_string()),
    }
}

fn header(record: &Record) -> Block {
    Block::Header {
        labels: record.keys().map(str::to_string).collect(),
    }
}

fn row(record: &Record) -> Block {
    Block::Row {
        cells: record.fields().iter().map(field_cell).collect(),
    }
}
