//! Error types for the CloudTrail partitioner.
//!
//! Every failure in a run is fatal: errors propagate unchanged to the binary,
//! which reports them once and exits non-zero. There is no retry
//! classification here because nothing is retried.

use thiserror::Error;

/// Boxed cause carried by errors that wrap an AWS SDK failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for the partitioner.
#[derive(Error, Debug)]
pub enum CtpError {
    /// Missing, malformed or mutually exclusive settings.
    ///
    /// Always raised before the first listing call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No `o-` prefixed organization segment under the logs root.
    #[error("Could not find org id in bucket {bucket} under {prefix}")]
    OrgNotFound { bucket: String, prefix: String },

    /// More than one `o-` prefixed organization segment under the logs root.
    #[error("Found more than one org id in bucket {bucket}: {}", .candidates.join(", "))]
    AmbiguousOrg {
        bucket: String,
        candidates: Vec<String>,
    },

    /// The storage listing capability failed.
    #[error("Listing s3://{bucket}/{prefix} failed: {source}")]
    Listing {
        bucket: String,
        prefix: String,
        #[source]
        source: BoxError,
    },

    /// The query execution capability rejected a statement.
    #[error("Submitting statement #{sequence} failed: {source}")]
    Submission {
        sequence: usize,
        #[source]
        source: BoxError,
    },

    /// A single partition clause cannot fit even in an empty statement.
    #[error("Partition clause of {len} characters exceeds statement capacity of {capacity}")]
    ClauseTooLarge { len: usize, capacity: usize },

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CtpError {
    /// Wrap a listing failure for `bucket`/`prefix`.
    pub fn listing(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Listing {
            bucket: bucket.into(),
            prefix: prefix.into(),
            source: source.into(),
        }
    }

    /// Wrap a submission failure for the statement at `sequence` (0-based).
    pub fn submission(sequence: usize, source: impl Into<BoxError>) -> Self {
        Self::Submission {
            sequence,
            source: source.into(),
        }
    }

    /// Returns true if this error was detected before any network call.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type alias using CtpError.
pub type Result<T> = std::result::Result<T, CtpError>;
