//! HTML 序列化
//!
//! 所有插入文本和属性值都经过转义。

use std::fmt;

use crate::view::{Block, Cell, View};

/// Display adapter that writes its contents HTML-escaped.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, c) in self.0.char_indices() {
            let entity = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(entity)?;
            last = i + c.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text { text } => write!(f, "{}", Escaped(text)),
            Cell::Link { href, label } => {
                write!(f, r#"<a href="{}">{}</a>"#, Escaped(href), Escaped(label))
            }
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Card { href, label, count } => write!(
                f,
                r#"<div class="model-card"><h3><a href="{}">{}</a> - {} entities</h3></div>"#,
                Escaped(href),
                Escaped(label),
                count
            ),
            Block::Header { labels } => {
                f.write_str(r#"<p class="model-header">"#)?;
                for label in labels {
                    write!(f, " <strong>{}</strong> ", Escaped(label))?;
                }
                f.write_str("</p>")
            }
            Block::Row { cells } => {
                f.write_str(r#"<p class="model-row">"#)?;
                for cell in cells {
                    write!(f, " {} ", cell)?;
                }
                f.write_str("</p>")
            }
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<div id="{}">"#, Escaped(self.mount_point))?;
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        f.write_str("</div>")
    }
}
