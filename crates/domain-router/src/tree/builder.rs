/// Route tree builder
///
/// Walks sorted page files and nests every file under the layout route of
/// the folder it lives in (`parent.vue` + `parent/child.vue`).
use tracing::debug;

use super::node::{RouteNode, RoutePrefix};
use crate::error::RouteTreeError;
use crate::file::ScannedFile;
use crate::path::{collapse_index, join_url, strip_extension, with_leading_slash};
use crate::segment::{render_route_path, segment_name, tokenize_segment};

/// Route being assembled for one file
struct PendingRoute {
    name: String,
    path: String,
}

impl PendingRoute {
    fn new(prefix: &RoutePrefix) -> Self {
        Self {
            name: prefix.name.clone(),
            path: prefix.path.clone(),
        }
    }

    fn push_name(&mut self, segment_name: &str) {
        if !self.name.is_empty() {
            self.name.push('/');
        }
        self.name.push_str(segment_name);
    }

    fn into_node(self, file: &ScannedFile) -> RouteNode {
        RouteNode::new(self.name, self.path, file.absolute_path.as_str())
    }
}

/// Index of the layout route a file continues into, if any
fn find_layout(siblings: &[RouteNode], name: &str, path: &str) -> Option<usize> {
    siblings
        .iter()
        .position(|node| node.name.as_deref() == Some(name) && node.path == path)
}

/// Inserts one file into the forest
fn insert_file(
    pages: &mut Vec<RouteNode>,
    file: &ScannedFile,
    prefix: &RoutePrefix,
) -> Result<(), RouteTreeError> {
    let malformed = |source| RouteTreeError::MalformedFile {
        relative_path: file.relative_path.clone(),
        source,
    };

    let mut route = PendingRoute::new(prefix);
    let mut target = pages;

    let segments: Vec<&str> = strip_extension(&file.relative_path).split('/').collect();
    let last = segments.len() - 1;

    for (position, segment) in segments.into_iter().enumerate() {
        let tokens = tokenize_segment(segment).map_err(malformed)?;
        let name = segment_name(&tokens);
        let rendered = render_route_path(&tokens);

        route.push_name(&name);

        let prospective = with_leading_slash(&join_url(&route.path, &collapse_index(&rendered)))
            .into_owned();

        // A file's own last segment never continues into a layout: an identical
        // earlier route is a duplicate, left for the normalizer to report.
        let layout = if position < last {
            find_layout(target, &route.name, &prospective)
        } else {
            None
        };

        if let Some(index) = layout {
            debug!(
                file = %file.relative_path,
                layout = %target[index].file,
                "nesting under layout route"
            );
            target = &mut target[index].children;
            route.path.clear();
        } else if name == "index" && route.path.is_empty() {
            route.path.push('/');
        } else if name != "index" {
            route.path.push_str(&rendered);
        }
    }

    target.push(route.into_node(file));
    Ok(())
}

/// Builds the raw route tree for one domain
///
/// `files` must already be sorted (see [`crate::sort_scanned_files`]).
/// Names are still `/`-separated and child paths still carry their leading
/// `/`; run [`crate::normalize_route_tree`] on the result.
///
/// # Errors
///
/// The first file with a malformed segment aborts the build.
pub fn build_route_tree_with_prefix(
    files: &[ScannedFile],
    prefix: &RoutePrefix,
) -> Result<Vec<RouteNode>, RouteTreeError> {
    let mut pages = Vec::new();

    for file in files {
        insert_file(&mut pages, file, prefix)?;
    }

    debug!(
        prefix = %prefix.name,
        files = files.len(),
        top_level = pages.len(),
        "built route tree"
    );
    Ok(pages)
}

/// Builds the raw route tree for a domain mounted under its own name
///
/// # Examples
///
/// ```
/// use domain_router::{build_route_tree, ScannedFile};
///
/// let files = vec![
///     ScannedFile::under_root("/pages", "parent.vue", "Hello"),
///     ScannedFile::under_root("/pages", "parent/child.vue", "Hello"),
/// ];
/// let tree = build_route_tree(&files, "Hello").unwrap();
///
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].name.as_deref(), Some("Hello/parent"));
/// assert_eq!(tree[0].path, "/Hello/parent");
/// assert_eq!(tree[0].children[0].path, "/child");
/// ```
pub fn build_route_tree(
    files: &[ScannedFile],
    domain: &str,
) -> Result<Vec<RouteNode>, RouteTreeError> {
    build_route_tree_with_prefix(files, &RoutePrefix::domain(domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    fn files(paths: &[&str]) -> Vec<ScannedFile> {
        paths
            .iter()
            .map(|p| ScannedFile::under_root("/pages", p, "Hello"))
            .collect()
    }

    #[test]
    fn test_root_index_keeps_domain_path() {
        let tree = build_route_tree(&files(&["index.vue"]), "Hello").unwrap();
        assert_eq!(tree[0].name.as_deref(), Some("Hello/index"));
        assert_eq!(tree[0].path, "/Hello");
        assert_eq!(tree[0].file, "/pages/index.vue");
    }

    #[test]
    fn test_dynamic_segments() {
        let tree = build_route_tree(&files(&["[test]/[id].vue"]), "Hello").unwrap();
        assert_eq!(tree[0].name.as_deref(), Some("Hello/test/id"));
        assert_eq!(tree[0].path, "/Hello/:test()/:id()");
    }

    #[test]
    fn test_folder_without_layout_is_flat() {
        let tree = build_route_tree(&files(&["users/[id].vue", "users/new.vue"]), "Hello").unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].path, "/Hello/users/:id()");
        assert_eq!(tree[1].path, "/Hello/users/new");
    }

    #[test]
    fn test_layout_collects_children() {
        let tree = build_route_tree(
            &files(&["parent.vue", "parent/a.vue", "parent/index.vue"]),
            "Hello",
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
        let children = &tree[0].children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name.as_deref(), Some("Hello/parent/a"));
        assert_eq!(children[0].path, "/a");
        assert_eq!(children[1].name.as_deref(), Some("Hello/parent/index"));
        assert_eq!(children[1].path, "/");
    }

    #[test]
    fn test_nested_layouts() {
        let tree = build_route_tree(
            &files(&["a.vue", "a/b.vue", "a/b/c.vue"]),
            "Hello",
        )
        .unwrap();
        let b = &tree[0].children[0];
        assert_eq!(b.path, "/b");
        assert_eq!(b.children[0].name.as_deref(), Some("Hello/a/b/c"));
        assert_eq!(b.children[0].path, "/c");
    }

    #[test]
    fn test_dynamic_layout() {
        let tree = build_route_tree(&files(&["[id].vue", "[id]/edit.vue"]), "Hello").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].path, "/Hello/:id()");
        assert_eq!(tree[0].children[0].path, "/edit");
    }

    #[test]
    fn test_duplicates_are_both_inserted() {
        let tree = build_route_tree(&files(&["about.vue", "about.ts"]), "Hello").unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_file_under_duplicate_goes_to_first_match() {
        let tree = build_route_tree(
            &files(&["about.ts", "about.vue", "about/team.vue"]),
            "Hello",
        )
        .unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 1);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_empty_prefix_mounts_at_root() {
        let tree = build_route_tree(&files(&["index.vue", "about.vue"]), "").unwrap();
        assert_eq!(tree[0].name.as_deref(), Some("index"));
        assert_eq!(tree[0].path, "/");
        assert_eq!(tree[1].name.as_deref(), Some("about"));
        assert_eq!(tree[1].path, "/about");
    }

    #[test]
    fn test_aliased_prefix() {
        let prefix = RoutePrefix::aliased("Hello", "test");
        let tree = build_route_tree_with_prefix(&files(&["about.vue"]), &prefix).unwrap();
        assert_eq!(tree[0].name.as_deref(), Some("Hello/about"));
        assert_eq!(tree[0].path, "/test/about");
    }

    #[test]
    fn test_malformed_segment_aborts_build() {
        let err = build_route_tree(&files(&["ok.vue", "users/[id.vue"]), "Hello").unwrap_err();
        match err {
            RouteTreeError::MalformedFile {
                relative_path,
                source,
            } => {
                assert_eq!(relative_path, "users/[id.vue");
                assert_eq!(source.reason, MalformedReason::UnterminatedParameter);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(build_route_tree(&[], "Hello").unwrap().is_empty());
    }
}
