/// Diagnostics sink for non-fatal problems found while normalizing
use std::fmt;

/// A non-fatal finding about the generated routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two routes ended up with the same flat name. The router keeps the one
    /// registered last.
    DuplicateRouteName {
        name: String,
        /// File of the route registered first
        first_file: String,
        /// File of the route that collided with it
        file: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateRouteName {
                name,
                first_file,
                file,
            } => write!(
                f,
                "Route name generated for \"{}\" is the same as \"{}\" (name: {}). \
                 You may want to rename one of these files.",
                file, first_file, name
            ),
        }
    }
}

/// Receives diagnostics during normalization
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in order
impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits every diagnostic as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
