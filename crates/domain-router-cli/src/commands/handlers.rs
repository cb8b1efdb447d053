use anyhow::{Context, Result};
use domain_router::{handler_route, sort_scanned_files, DomainRouterConfig, HandlerKind, ScannedFile};

use crate::input;

/// `(route, absolute file)` per handler, in sorted file order
pub fn resolve(
    domain: &str,
    root: &str,
    kind: HandlerKind,
    paths: Vec<String>,
) -> Result<Vec<(String, String)>> {
    let mut files: Vec<ScannedFile> = paths
        .iter()
        .map(|path| ScannedFile::under_root(root, path, domain))
        .collect();
    sort_scanned_files(&mut files);

    files
        .into_iter()
        .map(|file| {
            let route = handler_route(&file.relative_path, domain, kind)
                .with_context(|| format!("Invalid handler file name: {}", file.relative_path))?;
            Ok((route, file.absolute_path))
        })
        .collect()
}

pub fn execute(
    config_path: &str,
    domain: &str,
    files: Vec<String>,
    kind: HandlerKind,
    root: Option<String>,
) -> Result<()> {
    let config = DomainRouterConfig::load(config_path)?;
    let root = input::resolve_root(root, &config.directory, domain, &["server", kind.dir_name()])?;
    let paths = input::file_list(files, std::io::stdin().lock())?;

    for (route, file) in resolve(domain, &root, kind, paths)? {
        println!("{}\t{}", route, file);
    }

    Ok(())
}
