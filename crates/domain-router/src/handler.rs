/// Server handler routes
///
/// Maps a handler file under a domain's `server/api` or `server/routes`
/// folder to the URL it is mounted at. Same bracket syntax as pages, no
/// nesting.
use crate::error::MalformedSegment;
use crate::path::{join_url, strip_extension, to_forward_slashes};
use crate::segment::{render_route_path, tokenize_segment};

/// Folder a handler was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// `server/api/**` → `/api/<domain>/...`
    Api,
    /// `server/routes/**` → `/<domain>/...`
    Route,
}

impl HandlerKind {
    fn prefix(self, domain: &str) -> String {
        match self {
            HandlerKind::Api => join_url("/api", domain),
            HandlerKind::Route if domain.is_empty() => String::new(),
            HandlerKind::Route => format!("/{}", domain.trim_matches('/')),
        }
    }

    /// Sub-folder of a domain's `server/` directory holding this kind
    pub fn dir_name(self) -> &'static str {
        match self {
            HandlerKind::Api => "api",
            HandlerKind::Route => "routes",
        }
    }
}

/// Computes the route of a server handler file
///
/// `relative_path` is relative to the kind's folder. A trailing `index`
/// segment maps to its parent route.
///
/// # Examples
///
/// ```
/// use domain_router::{handler_route, HandlerKind};
///
/// assert_eq!(
///     handler_route("users/[id].ts", "Hello", HandlerKind::Api).unwrap(),
///     "/api/Hello/users/:id()"
/// );
/// assert_eq!(
///     handler_route("index.ts", "Hello", HandlerKind::Route).unwrap(),
///     "/Hello"
/// );
/// ```
pub fn handler_route(
    relative_path: &str,
    domain: &str,
    kind: HandlerKind,
) -> Result<String, MalformedSegment> {
    let relative = to_forward_slashes(relative_path);
    let mut route = kind.prefix(domain);

    for segment in strip_extension(&relative).split('/') {
        let tokens = tokenize_segment(segment)?;
        route.push_str(&render_route_path(&tokens));
    }

    if let Some(head) = route.strip_suffix("/index") {
        route = head.to_string();
    }
    if route.is_empty() {
        route.push('/');
    }

    Ok(route)
}
