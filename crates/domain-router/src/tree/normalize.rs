/// Route tree normalizer
///
/// Rewrites builder output into the shape a router registers: flat names,
/// relative child paths, pathless layouts without a name of their own.
use std::collections::HashMap;

use tracing::trace;

use super::node::RouteNode;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Names registered so far, with the file that claimed each one first
#[derive(Debug, Default)]
struct SeenNames {
    files: HashMap<String, String>,
}

impl SeenNames {
    /// File that first registered `name`, or `None` if it is new
    fn owner(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    fn register(&mut self, name: &str, file: &str) {
        self.files
            .entry(name.to_string())
            .or_insert_with(|| file.to_string());
    }
}

/// `Hello/parent/index` → `Hello-parent`
fn flatten_name(name: &str) -> String {
    name.strip_suffix("/index").unwrap_or(name).replace('/', "-")
}

fn normalize_level<D: Diagnostics + ?Sized>(
    nodes: &mut [RouteNode],
    depth: usize,
    seen: &mut SeenNames,
    diagnostics: &mut D,
) {
    for node in nodes.iter_mut() {
        if let Some(name) = node.name.take() {
            node.name = Some(flatten_name(&name));
        }

        // Child paths are relative to the parent
        if depth > 0 && node.path.starts_with('/') {
            node.path.remove(0);
        }

        if !node.children.is_empty() {
            normalize_level(&mut node.children, depth + 1, seen, diagnostics);
        }

        if node.children.iter().any(RouteNode::is_pathless) {
            trace!(file = %node.file, "pathless child takes over route name");
            node.name = None;
        }

        if let Some(name) = node.name.as_deref() {
            if let Some(first_file) = seen.owner(name) {
                diagnostics.report(Diagnostic::DuplicateRouteName {
                    name: name.to_string(),
                    first_file: first_file.to_string(),
                    file: node.file.clone(),
                });
            }
            seen.register(name, &node.file);
        }
    }
}

/// Normalizes a built route tree in place
///
/// Per route, in order:
///
/// 1. Name: trailing `/index` removed, `/` replaced by `-`
/// 2. Child path: one leading `/` removed
/// 3. Children normalized
/// 4. Name cleared when a child has an empty path
/// 5. Duplicate names reported to `diagnostics`
///
/// Never fails. Running it twice yields the same tree.
///
/// # Examples
///
/// ```
/// use domain_router::{build_route_tree, normalize_route_tree, Diagnostic, ScannedFile};
///
/// let files = vec![
///     ScannedFile::under_root("/pages", "parent.vue", "Hello"),
///     ScannedFile::under_root("/pages", "parent/child.vue", "Hello"),
/// ];
/// let mut tree = build_route_tree(&files, "Hello").unwrap();
/// let mut warnings: Vec<Diagnostic> = Vec::new();
/// normalize_route_tree(&mut tree, &mut warnings);
///
/// assert_eq!(tree[0].name.as_deref(), Some("Hello-parent"));
/// assert_eq!(tree[0].children[0].name.as_deref(), Some("Hello-parent-child"));
/// assert_eq!(tree[0].children[0].path, "child");
/// assert!(warnings.is_empty());
/// ```
pub fn normalize_route_tree<'a, D: Diagnostics + ?Sized>(
    nodes: &'a mut [RouteNode],
    diagnostics: &mut D,
) -> &'a mut [RouteNode] {
    let mut seen = SeenNames::default();
    normalize_level(nodes, 0, &mut seen, diagnostics);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(name: &str, path: &str, file: &str) -> RouteNode {
        RouteNode::new(name, path, file)
    }

    #[test]
    fn test_flatten_name() {
        assert_eq!(flatten_name("Hello/index"), "Hello");
        assert_eq!(flatten_name("Hello/parent/child"), "Hello-parent-child");
        assert_eq!(flatten_name("Hello/index/about"), "Hello-index-about");
        assert_eq!(flatten_name("index"), "index");
    }

    #[test]
    fn test_root_paths_keep_leading_slash() {
        let mut tree = vec![node("Hello/about", "/Hello/about", "about.vue")];
        normalize_route_tree(&mut tree, &mut Vec::<Diagnostic>::new());
        assert_eq!(tree, vec![node("Hello-about", "/Hello/about", "about.vue")]);
    }

    #[test]
    fn test_child_paths_become_relative() {
        let mut tree = vec![node("a", "/a", "a.vue")
            .with_children(vec![node("a/b", "/b", "a/b.vue")
                .with_children(vec![node("a/b/c", "/c", "a/b/c.vue")])])];
        normalize_route_tree(&mut tree, &mut Vec::<Diagnostic>::new());

        assert_eq!(tree[0].children[0].path, "b");
        assert_eq!(tree[0].children[0].children[0].path, "c");
        assert_eq!(tree[0].children[0].children[0].name.as_deref(), Some("a-b-c"));
    }

    #[test]
    fn test_pathless_child_clears_parent_name() {
        let mut tree = vec![node("Hello/parent", "/Hello/parent", "parent.vue")
            .with_children(vec![node("Hello/parent/index", "/", "parent/index.vue")])];
        let mut warnings: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut warnings);

        assert_eq!(tree[0].name, None);
        assert_eq!(tree[0].children[0].name.as_deref(), Some("Hello-parent"));
        assert_eq!(tree[0].children[0].path, "");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_name_reported_once() {
        let mut tree = vec![
            node("Hello/a-b", "/Hello/a-b", "/pages/a-b.vue"),
            node("Hello/a/b", "/Hello/a/b", "/pages/a/b.vue"),
        ];
        let mut warnings: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut warnings);

        assert_eq!(tree.len(), 2);
        assert_eq!(
            warnings,
            vec![Diagnostic::DuplicateRouteName {
                name: "Hello-a-b".to_string(),
                first_file: "/pages/a-b.vue".to_string(),
                file: "/pages/a/b.vue".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicates_across_levels() {
        let mut tree = vec![
            node("x/y", "/x/y", "x-y-flat.vue"),
            node("x", "/x", "x.vue").with_children(vec![node("x/y", "/y", "x/y.vue")]),
        ];
        let mut warnings: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut warnings);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_unnamed_routes_are_not_registered() {
        let mut tree = vec![
            node("a", "/a", "a.vue").unnamed(),
            node("a", "/a", "a2.vue").unnamed(),
        ];
        let mut warnings: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut tree = vec![
            node("Hello/index", "/Hello", "index.vue"),
            node("Hello/p", "/Hello/p", "p.vue").with_children(vec![
                node("Hello/p/index", "/", "p/index.vue"),
                node("Hello/p/q", "/q", "p/q.vue"),
            ]),
            node("Hello/id", "/Hello/:id()", "[id].vue"),
            node("Hello/id", "/Hello/id", "id.vue"),
        ];
        let mut first: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut first);
        let once = tree.clone();

        let mut second: Vec<Diagnostic> = Vec::new();
        normalize_route_tree(&mut tree, &mut second);

        assert_eq!(tree, once);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
