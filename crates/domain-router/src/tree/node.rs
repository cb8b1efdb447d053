/// Route tree types
use serde::{Deserialize, Serialize};

/// One route of the generated tree
///
/// - `path` is a router pattern (`/Hello/:id()`); children hold paths
///   relative to their parent, and an empty path marks the default child
/// - `name` is the flat route name; `None` once a pathless child took over
/// - `file` is the absolute path of the page backing the route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: String,
    pub file: String,
    #[serde(default)]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            file: file.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper for nesting, mostly useful in tests
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder-style helper to drop the name
    pub fn unnamed(mut self) -> Self {
        self.name = None;
        self
    }

    /// A child rendered at its parent's own path
    pub fn is_pathless(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of routes in this subtree, this one included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RouteNode::count).sum::<usize>()
    }
}

/// Depth-first lookup of a route by name
///
/// Returns `None` when no route in the forest carries `name`.
///
/// # Examples
///
/// ```
/// use domain_router::{find_route, RouteNode};
///
/// let tree = vec![RouteNode::new("Hello-parent", "/Hello/parent", "parent.vue")
///     .with_children(vec![RouteNode::new("Hello-parent-child", "child", "parent/child.vue")])];
///
/// assert_eq!(find_route(&tree, "Hello-parent-child").unwrap().path, "child");
/// assert!(find_route(&tree, "missing").is_none());
/// ```
pub fn find_route<'a>(nodes: &'a [RouteNode], name: &str) -> Option<&'a RouteNode> {
    nodes.iter().find_map(|node| {
        if node.name.as_deref() == Some(name) {
            Some(node)
        } else {
            find_route(&node.children, name)
        }
    })
}

/// Name and path every route of one build starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePrefix {
    pub name: String,
    pub path: String,
}

impl RoutePrefix {
    /// Prefix for a domain mounted under its own name (`Hello` → `/Hello`)
    ///
    /// An empty domain mounts at the root.
    pub fn domain(domain: &str) -> Self {
        let path = if domain.is_empty() {
            String::new()
        } else {
            format!("/{}", domain)
        };
        Self {
            name: domain.to_string(),
            path,
        }
    }

    /// Prefix for a domain whose URLs live under `alias`
    ///
    /// The name keeps the domain; `/` as alias mounts at the root.
    ///
    /// ```
    /// use domain_router::RoutePrefix;
    ///
    /// assert_eq!(RoutePrefix::aliased("Sales", "/s").path, "/s");
    /// assert_eq!(RoutePrefix::aliased("Marketing", "/").path, "");
    /// assert_eq!(RoutePrefix::aliased("Marketing", "/").name, "Marketing");
    /// ```
    pub fn aliased(domain: &str, alias: &str) -> Self {
        let trimmed = alias.trim_matches('/');
        let path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            name: domain.to_string(),
            path,
        }
    }
}
