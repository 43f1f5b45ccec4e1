//! 路由表
//!
//! 将请求路径匹配到三个仪表盘视图之一。每条路由同时知道自己的
//! 上游 API 端点、仪表盘链接和挂载容器 ID。

use serde::Serialize;

/// 仪表盘根路径
pub const DASHBOARD_ROOT: &str = "/admin/dashboard";

/// 路径模板片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param,
}

/// 视图类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    ModelList,
    ModelTable,
    ModelInstance,
}

impl RouteKind {
    /// 视图挂载的容器 ID
    pub fn mount_point(self) -> &'static str {
        match self {
            RouteKind::ModelList => "model-cards-dashboard",
            RouteKind::ModelTable => "model-table-dashboard",
            RouteKind::ModelInstance => "model-instance-dashboard",
        }
    }

    /// 上游请求失败时的错误消息
    pub fn fetch_error_message(self) -> &'static str {
        match self {
            RouteKind::ModelList => "Failed to fetch models",
            RouteKind::ModelTable => "Failed to fetch model data",
            RouteKind::ModelInstance => "Failed to fetch model instance data",
        }
    }
}

struct RouteTemplate {
    kind: RouteKind,
    segments: &'static [Segment],
}

const ROUTE_TABLE: &[RouteTemplate] = &[
    RouteTemplate {
        kind: RouteKind::ModelList,
        segments: &[Segment::Literal("admin"), Segment::Literal("dashboard")],
    },
    RouteTemplate {
        kind: RouteKind::ModelTable,
        segments: &[
            Segment::Literal("admin"),
            Segment::Literal("dashboard"),
            Segment::Param,
        ],
    },
    RouteTemplate {
        kind: RouteKind::ModelInstance,
        segments: &[
            Segment::Literal("admin"),
            Segment::Literal("dashboard"),
            Segment::Param,
            Segment::Param,
        ],
    },
];

impl RouteTemplate {
    /// Returns the decoded parameters when every segment matches.
    fn capture(&self, parts: &[&str]) -> Option<Vec<String>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param => {
                    let decoded = urlencoding::decode(part).ok()?;
                    if decoded.is_empty() {
                        return None;
                    }
                    params.push(decoded.into_owned());
                }
            }
        }
        Some(params)
    }

    fn build(&self, mut params: Vec<String>) -> Route {
        match self.kind {
            RouteKind::ModelList => Route::ModelList,
            RouteKind::ModelTable => Route::ModelTable {
                model: params.remove(0),
            },
            RouteKind::ModelInstance => {
                let id = params.remove(1);
                Route::ModelInstance {
                    model: params.remove(0),
                    id,
                }
            }
        }
    }
}

/// 已解析的仪表盘路由
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    /// `/admin/dashboard`
    ModelList,
    /// `/admin/dashboard/{model}`
    ModelTable { model: String },
    /// `/admin/dashboard/{model}/{id}`
    ModelInstance { model: String, id: String },
}

impl Route {
    /// Resolves a request path against the route table.
    ///
    /// The path must start with `/`; anything that does not match one of the
    /// three templates yields `None`.
    pub fn resolve(path: &str) -> Option<Route> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = rest.split('/').collect();

        ROUTE_TABLE.iter().find_map(|template| {
            template
                .capture(&parts)
                .map(|params| template.build(params))
        })
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::ModelList => RouteKind::ModelList,
            Route::ModelTable { .. } => RouteKind::ModelTable,
            Route::ModelInstance { .. } => RouteKind::ModelInstance,
        }
    }

    /// 仪表盘内的链接地址
    pub fn href(&self) -> String {
        match self {
            Route::ModelList => DASHBOARD_ROOT.to_string(),
            Route::ModelTable { model } => {
                format!("{}/{}", DASHBOARD_ROOT, urlencoding::encode(model))
            }
            Route::ModelInstance { model, id } => format!(
                "{}/{}/{}",
                DASHBOARD_ROOT,
                urlencoding::encode(model),
                urlencoding::encode(id)
            ),
        }
    }

    /// 对应的上游 API 路径
    pub fn api_path(&self) -> String {
        match self {
            Route::ModelList => "/api/models".to_string(),
            Route::ModelTable { model } => format!("/api/model/{}", urlencoding::encode(model)),
            Route::ModelInstance { model, id } => format!(
                "/api/model/{}/{}",
                urlencoding::encode(model),
                urlencoding::encode(id)
            ),
        }
    }

    pub fn mount_point(&self) -> &'static str {
        self.kind().mount_point()
    }

    pub fn fetch_error_message(&self) -> &'static str {
        self.kind().fetch_error_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(model: &str) -> Route {
        Route::ModelTable {
            model: model.to_string(),
        }
    }

    fn instance(model: &str, id: &str) -> Route {
        Route::ModelInstance {
            model: model.to_string(),
            id: id.to_string(),
        }
    }

    #[rstest]
    #[case("/admin/dashboard", Some(Route::ModelList))]
    #[case("/admin/dashboard/User", Some(table("User")))]
    #[case("/admin/dashboard/User/42", Some(instance("User", "42")))]
    #[case("/admin/dashboard/contract%20type", Some(table("contract type")))]
    #[case("/admin/dashboard/", None)]
    #[case("/admin/dashboard/User/", None)]
    #[case("/admin/dashboard/User/42/extra", None)]
    #[case("/admin", None)]
    #[case("/admin/dashboards", None)]
    #[case("/api/models", None)]
    #[case("/", None)]
    #[case("admin/dashboard", None)]
    fn test_resolve(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::resolve(path), expected);
    }

    #[test]
    fn test_instance_route_targets_instance_endpoint() {
        let route = Route::resolve("/admin/dashboard/User/42").unwrap();
        assert_eq!(route.api_path(), "/api/model/User/42");
        assert_eq!(route.mount_point(), "model-instance-dashboard");
        assert_eq!(route.fetch_error_message(), "Failed to fetch model instance data");
    }

    #[test]
    fn test_api_paths() {
        assert_eq!(Route::ModelList.api_path(), "/api/models");
        assert_eq!(table("Order").api_path(), "/api/model/Order");
        assert_eq!(table("a/b").api_path(), "/api/model/a%2Fb");
    }

    #[test]
    fn test_href_round_trips_through_resolve() {
        let route = instance("owner", "5");
        assert_eq!(route.href(), "/admin/dashboard/owner/5");
        assert_eq!(Route::resolve(&route.href()), Some(route));

        let route = table("contract type");
        assert_eq!(route.href(), "/admin/dashboard/contract%20type");
        assert_eq!(Route::resolve(&route.href()), Some(route));
    }
}
