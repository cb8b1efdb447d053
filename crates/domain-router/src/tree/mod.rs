/// Route tree module
///
/// - `node`: tree types and prefixes
/// - `builder`: sorted files → raw tree
/// - `normalize`: raw tree → registrable tree

pub mod builder;
pub mod node;
pub mod normalize;

pub use builder::{build_route_tree, build_route_tree_with_prefix};
pub use node::{find_route, RouteNode, RoutePrefix};
pub use normalize::normalize_route_tree;
