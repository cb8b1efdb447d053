/// Scanned page files handed over by the discovery collaborator

pub mod collate;

pub use collate::compare_paths;

use crate::path::to_forward_slashes;

/// A page file found under a domain's pages directory
///
/// `relative_path` always uses `/` as separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScannedFile {
    pub relative_path: String,
    pub absolute_path: String,
    pub domain: String,
}

impl ScannedFile {
    pub fn new(
        relative_path: impl AsRef<str>,
        absolute_path: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: to_forward_slashes(relative_path.as_ref()).into_owned(),
            absolute_path: absolute_path.into(),
            domain: domain.into(),
        }
    }

    /// Builds the absolute path by joining `root` and `relative_path`
    ///
    /// ```
    /// use domain_router::ScannedFile;
    ///
    /// let file = ScannedFile::under_root("/app/src/Hello/pages/", "parent\\child.vue", "Hello");
    /// assert_eq!(file.relative_path, "parent/child.vue");
    /// assert_eq!(file.absolute_path, "/app/src/Hello/pages/parent/child.vue");
    /// ```
    pub fn under_root(root: &str, relative_path: &str, domain: impl Into<String>) -> Self {
        let relative = to_forward_slashes(relative_path);
        let relative = relative.trim_start_matches('/');
        let root = to_forward_slashes(root);
        let root = root.trim_end_matches('/');

        let absolute_path = if root.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", root, relative)
        };

        Self {
            relative_path: relative.to_string(),
            absolute_path,
            domain: domain.into(),
        }
    }
}

/// Sorts files into the order the tree builder expects
pub fn sort_scanned_files(files: &mut [ScannedFile]) {
    files.sort_by(|a, b| compare_paths(&a.relative_path, &b.relative_path));
}
