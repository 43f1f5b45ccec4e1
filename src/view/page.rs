//! 宿主页面
//!
//! 将视图嵌入完整的 HTML 文档。

use crate::config::PageConfig;
use crate::routing::Route;
use crate::view::View;
use crate::view::html::Escaped;

/// Renders the host document for a route with its view mounted.
pub fn render_page(page: &PageConfig, route: &Route, view: &View) -> String {
    let title = match route {
        Route::ModelList => page.title.clone(),
        Route::ModelTable { model } => format!("{} - {}", model, page.title),
        Route::ModelInstance { model, id } => format!("{} {} - {}", model, id, page.title),
    };

    let stylesheet = page
        .stylesheet
        .as_deref()
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, Escaped(href)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{stylesheet}
</head>
<body>
<nav><a href="{root}">{heading}</a></nav>
<main>
{view}
</main>
</body>
</html>
"#,
        title = Escaped(&title),
        stylesheet = stylesheet,
        root = Route::ModelList.href(),
        heading = Escaped(&page.title),
        view = view,
    )
}
