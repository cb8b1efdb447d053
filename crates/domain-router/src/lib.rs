//! # Domain Router
//!
//! Compiles the page files of a domain folder into a nested route table:
//! - Static segments (`about.vue` → `/Hello/about`)
//! - Dynamic parameters (`[id].vue` → `/Hello/:id()`)
//! - Optional parameters (`[[lang]].vue` → `/Hello/:lang?`)
//! - Catch-all routes (`[...slug].vue` → `/Hello/:slug(.*)*`)
//! - Nested layouts (`parent.vue` + `parent/child.vue`)
//!
//! ## Pipeline
//!
//! ```text
//! sorted files → tokenize_segment → render_route_path → build_route_tree → normalize_route_tree
//! ```
//!
//! The crate never touches the filesystem for pages: discovery is up to the
//! caller, which hands over relative paths (see [`ScannedFile`]). Problems
//! that do not stop the build, like two routes sharing a name, go to a
//! [`Diagnostics`] sink.
//!
//! ## Example
//!
//! ```
//! use domain_router::{compile_routes, sort_scanned_files, Diagnostic, RoutePrefix, ScannedFile};
//!
//! let mut files: Vec<ScannedFile> = ["index.vue", "parent.vue", "parent/child.vue", "[test]/[id].vue"]
//!     .iter()
//!     .map(|p| ScannedFile::under_root("/app/src/Hello/pages", p, "Hello"))
//!     .collect();
//! sort_scanned_files(&mut files);
//!
//! let mut warnings: Vec<Diagnostic> = Vec::new();
//! let routes = compile_routes(&files, &RoutePrefix::domain("Hello"), &mut warnings).unwrap();
//!
//! assert_eq!(routes[0].path, "/Hello/:test()/:id()");
//! assert_eq!(routes[1].name.as_deref(), Some("Hello"));
//! assert_eq!(routes[2].children[0].path, "child");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod diagnostics;
mod error;
pub mod file;
mod handler;
pub mod path;
pub mod segment;
pub mod tree;

pub use config::DomainRouterConfig;
pub use diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
pub use error::{ConfigError, MalformedReason, MalformedSegment, RouteTreeError};
pub use file::{compare_paths, sort_scanned_files, ScannedFile};
pub use handler::{handler_route, HandlerKind};
pub use segment::{render_route_path, segment_name, tokenize_segment, SegmentToken, TokenKind};
pub use tree::{
    build_route_tree, build_route_tree_with_prefix, find_route, normalize_route_tree, RouteNode,
    RoutePrefix,
};

/// Builds and normalizes the route tree of one domain
///
/// `files` must be sorted with [`sort_scanned_files`].
pub fn compile_routes<D: Diagnostics + ?Sized>(
    files: &[ScannedFile],
    prefix: &RoutePrefix,
    diagnostics: &mut D,
) -> Result<Vec<RouteNode>, RouteTreeError> {
    let mut routes = build_route_tree_with_prefix(files, prefix)?;
    normalize_route_tree(&mut routes, diagnostics);
    Ok(routes)
}
