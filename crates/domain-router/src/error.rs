/// Error types for segment tokenizing and route tree building
use std::fmt;

use thiserror::Error;

/// Why a segment could not be tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A `[` was opened and the segment ended before it was closed
    UnterminatedParameter,
    /// Brackets closed around nothing, e.g. `[]`
    EmptyParameterName,
}

/// A path segment that does not follow the bracket syntax
///
/// # Examples
///
/// ```
/// use domain_router::{tokenize_segment, MalformedReason};
///
/// let err = tokenize_segment("[id").unwrap_err();
/// assert_eq!(err.reason, MalformedReason::UnterminatedParameter);
/// assert_eq!(err.segment, "[id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSegment {
    /// The offending segment, extension already stripped
    pub segment: String,
    /// What went wrong
    pub reason: MalformedReason,
    /// Parameter text collected before the failure
    pub buffer: String,
}

impl fmt::Display for MalformedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            MalformedReason::UnterminatedParameter => write!(
                f,
                "unfinished param \"{}\" in segment \"{}\"",
                self.buffer, self.segment
            ),
            MalformedReason::EmptyParameterName => {
                write!(f, "empty param in segment \"{}\"", self.segment)
            }
        }
    }
}

impl std::error::Error for MalformedSegment {}

/// Failure while building a route tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTreeError {
    /// One of the scanned files has a malformed segment. The build is aborted.
    #[error("cannot build route for {relative_path}")]
    MalformedFile {
        relative_path: String,
        #[source]
        source: MalformedSegment,
    },
}

/// Failure while loading `domain-router.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
