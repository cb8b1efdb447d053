/// Path utilities for file names and URL joining
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Removes the extension of the last path component
///
/// A leading dot (`.hidden`) is part of the name, not an extension.
///
/// # Examples
///
/// ```
/// use domain_router::path::strip_extension;
///
/// assert_eq!(strip_extension("users/[id].vue"), "users/[id]");
/// assert_eq!(strip_extension("a.b/c.page.ts"), "a.b/c.page");
/// assert_eq!(strip_extension("README"), "README");
/// assert_eq!(strip_extension("dir/.hidden"), "dir/.hidden");
/// ```
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..name_start + dot],
        _ => path,
    }
}

/// Converts Windows separators to `/`
///
/// Returns `Cow::Borrowed` when there is nothing to convert.
pub fn to_forward_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// A URL piece that contributes nothing when joined
fn is_empty_url(url: &str) -> bool {
    url.is_empty() || url == "/"
}

/// Joins two URL pieces with exactly one `/` between them
///
/// Empty pieces and a lone `/` are skipped.
///
/// # Examples
///
/// ```
/// use domain_router::path::join_url;
///
/// assert_eq!(join_url("/Hello", "/parent"), "/Hello/parent");
/// assert_eq!(join_url("/Hello/", "/parent"), "/Hello/parent");
/// assert_eq!(join_url("/Hello", "/"), "/Hello");
/// assert_eq!(join_url("", "/child"), "/child");
/// ```
pub fn join_url(base: &str, segment: &str) -> String {
    if is_empty_url(segment) {
        return base.to_string();
    }
    if base.is_empty() {
        return segment.to_string();
    }

    let segment = segment
        .strip_prefix("./")
        .or_else(|| segment.strip_prefix('/'))
        .unwrap_or(segment);

    let mut joined = String::with_capacity(base.len() + segment.len() + 1);
    joined.push_str(base);
    if !base.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(segment);
    joined
}

/// Prepends `/` unless already present
pub fn with_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}

/// Collapses a trailing `/index` into `/`
///
/// ```
/// use domain_router::path::collapse_index;
///
/// assert_eq!(collapse_index("/index"), "/");
/// assert_eq!(collapse_index("/users/index"), "/users/");
/// assert_eq!(collapse_index("/indexes"), "/indexes");
/// ```
pub fn collapse_index(path: &str) -> Cow<'_, str> {
    match path.strip_suffix("/index") {
        Some(head) => Cow::Owned(format!("{}/", head)),
        None => Cow::Borrowed(path),
    }
}
