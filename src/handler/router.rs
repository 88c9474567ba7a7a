//! Route table module
//!
//! An explicit, ordered list of `(method, pattern) -> target` entries,
//! evaluated top to bottom. The static-asset entry is listed before the
//! catch-all so it always wins for matching requests.

use hyper::Method;

/// Where a matched request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Served from the sandboxed static directory.
    StaticAssets,
    /// Forwarded verbatim to the wrapped application.
    Application,
}

/// Path pattern of a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches paths starting with the prefix; the remainder is the
    /// captured multi-segment asset path.
    Prefix(&'static str),
    /// Matches every path.
    Any,
}

/// One entry in the route table. `method: None` matches any method.
pub struct Route {
    pub method: Option<Method>,
    pub pattern: RoutePattern,
    pub target: RouteTarget,
}

/// A successful match: the target plus the captured path remainder.
pub struct RouteMatch<'a> {
    pub target: RouteTarget,
    pub rest: &'a str,
}

/// URL prefix the static file server is registered under.
pub const STATIC_PREFIX: &str = "/static/";

/// The fixed dispatch order: static assets first, then the catch-all.
pub fn route_table() -> Vec<Route> {
    vec![
        Route {
            method: Some(Method::GET),
            pattern: RoutePattern::Prefix(STATIC_PREFIX),
            target: RouteTarget::StaticAssets,
        },
        Route {
            method: None,
            pattern: RoutePattern::Any,
            target: RouteTarget::Application,
        },
    ]
}

/// Return the first entry matching the request, in table order.
pub fn match_route<'a>(routes: &[Route], method: &Method, path: &'a str) -> Option<RouteMatch<'a>> {
    for route in routes {
        if let Some(expected) = &route.method {
            if expected != method {
                continue;
            }
        }
        match route.pattern {
            RoutePattern::Prefix(prefix) => {
                if let Some(rest) = path.strip_prefix(prefix) {
                    return Some(RouteMatch {
                        target: route.target,
                        rest,
                    });
                }
            }
            RoutePattern::Any => {
                return Some(RouteMatch {
                    target: route.target,
                    rest: path,
                });
            }
        }
    }
    None
}
