use anyhow::{Context, Result};
use colored::Colorize;
use domain_router::{
    compile_routes, sort_scanned_files, Diagnostic, DomainRouterConfig, RouteNode, ScannedFile,
};
use tracing::{debug, warn};

use crate::input;

/// Outcome of compiling one domain's pages
pub struct PagesReport {
    pub routes: Vec<RouteNode>,
    pub diagnostics: Vec<Diagnostic>,
    pub skipped: Vec<String>,
}

/// Compiles relative page paths into a normalized route tree
pub fn compile(
    config: &DomainRouterConfig,
    domain: &str,
    root: &str,
    paths: Vec<String>,
) -> Result<PagesReport> {
    let (accepted, skipped): (Vec<String>, Vec<String>) =
        paths.into_iter().partition(|path| config.accepts(path));

    let mut files: Vec<ScannedFile> = accepted
        .iter()
        .map(|path| ScannedFile::under_root(root, path, domain))
        .collect();
    sort_scanned_files(&mut files);

    let prefix = config.prefix_for(domain);
    debug!(domain, path = %prefix.path, files = files.len(), "compiling pages");

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let routes = compile_routes(&files, &prefix, &mut diagnostics)
        .with_context(|| format!("Failed to build routes for domain '{}'", domain))?;

    Ok(PagesReport {
        routes,
        diagnostics,
        skipped,
    })
}

pub fn execute(
    config_path: &str,
    domain: &str,
    files: Vec<String>,
    root: Option<String>,
    deny_duplicates: bool,
) -> Result<()> {
    let config = DomainRouterConfig::load(config_path)?;
    let root = input::resolve_root(root, &config.directory, domain, &["pages"])?;
    let paths = input::file_list(files, std::io::stdin().lock())?;

    let report = compile(&config, domain, &root, paths)?;

    for path in &report.skipped {
        debug!(path = %path, "skipping file with unrecognized extension");
    }
    for diagnostic in &report.diagnostics {
        warn!("{}", diagnostic);
    }

    let json = serde_json::to_string_pretty(&report.routes)?;
    println!("{}", json);

    let total: usize = report.routes.iter().map(RouteNode::count).sum();
    eprintln!(
        "{} {} routes for {}",
        "✓".green(),
        total,
        domain.cyan()
    );

    if !report.diagnostics.is_empty() {
        eprintln!(
            "{} {} duplicate route name(s)",
            "⚠".yellow(),
            report.diagnostics.len()
        );
        if deny_duplicates {
            anyhow::bail!("Duplicate route names found in domain '{}'", domain);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_compile_sorts_and_nests() {
        let config = DomainRouterConfig::default();
        let report = compile(
            &config,
            "Hello",
            "/pages",
            paths(&["parent/child.vue", "parent.vue", "index.vue"]),
        )
        .unwrap();

        let names: Vec<Option<&str>> = report.routes.iter().map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Hello"), Some("Hello-parent")]);
        assert_eq!(report.routes[1].children[0].file, "/pages/parent/child.vue");
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_compile_skips_unknown_extensions() {
        let config = DomainRouterConfig::default();
        let report = compile(&config, "Hello", "/pages", paths(&["index.vue", "notes.md"])).unwrap();
        assert_eq!(report.routes.len(), 1);
        assert_eq!(report.skipped, vec!["notes.md"]);
    }

    #[test]
    fn test_compile_reports_duplicates() {
        let config = DomainRouterConfig::default();
        let report = compile(&config, "Hello", "/pages", paths(&["a-b.vue", "a/b.vue"])).unwrap();
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_compile_malformed_has_context() {
        let config = DomainRouterConfig::default();
        let err = compile(&config, "Hello", "/pages", paths(&["[id.vue"]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Hello"));
    }
}
