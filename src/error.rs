//! Application error types using thiserror
//!
//! Error hierarchy:
//! - PolicyError: Issues with version tokens, ranges and rule text
//! - SourceError: Issues acquiring rule or manifest text

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rule/manifest parsing errors
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Source acquisition errors
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// The kind of a [`PolicyError`], independent of line context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyErrorKind {
    MalformedVersion,
    InvalidRange,
    StreamFailure,
}

/// Errors raised while parsing versions, ranges and rule text
#[derive(Error, Debug)]
pub enum PolicyError {
    /// A version token does not match `v<int>.<int>.<int>`
    #[error("unable to parse version token '{token}'")]
    MalformedVersion { token: String },

    /// A range with no bounds, or with upper not strictly above lower
    #[error("invalid range: {reason}")]
    InvalidRange { reason: String },

    /// Underlying read error from the input stream
    #[error("failed to read input: {0}")]
    StreamFailure(#[from] std::io::Error),

    /// Wraps another error with the 1-based line it occurred on
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<PolicyError>,
    },
}

impl PolicyError {
    /// Creates a new MalformedVersion error
    pub fn malformed_version(token: impl Into<String>) -> Self {
        PolicyError::MalformedVersion {
            token: token.into(),
        }
    }

    /// Creates a new InvalidRange error
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        PolicyError::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Attaches line context, keeping the underlying kind
    pub fn at_line(self, line: usize) -> Self {
        PolicyError::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the kind of this error, looking through line context
    pub fn kind(&self) -> PolicyErrorKind {
        match self {
            PolicyError::MalformedVersion { .. } => PolicyErrorKind::MalformedVersion,
            PolicyError::InvalidRange { .. } => PolicyErrorKind::InvalidRange,
            PolicyError::StreamFailure(_) => PolicyErrorKind::StreamFailure,
            PolicyError::AtLine { source, .. } => source.kind(),
        }
    }

    /// Returns true if this is (or wraps) an InvalidRange error
    pub fn is_invalid_range(&self) -> bool {
        self.kind() == PolicyErrorKind::InvalidRange
    }
}

/// Errors related to acquiring rule or manifest text
#[derive(Error, Debug)]
pub enum SourceError {
    /// Local file not found
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a local file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network request failed
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Non-success HTTP status
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Timeout
    #[error("timeout while fetching {url}")]
    Timeout { url: String },

    /// Failed to build the HTTP client
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl SourceError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        SourceError::NotFound { path: path.into() }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        SourceError::Timeout { url: url.into() }
    }
}
