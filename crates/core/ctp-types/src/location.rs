//! Storage locations within the CloudTrail bucket layout.
//!
//! CloudTrail organization trails write objects under
//! `AWSLogs/<org-id>/<account-id>/CloudTrail/<region>/<year>/<month>/<day>/<file>.json.gz`.

use serde::{Deserialize, Serialize};

/// Top-level folder CloudTrail writes under.
pub const LOGS_ROOT_SEGMENT: &str = "AWSLogs";

/// Fixed segment between the account and region levels.
pub const CLOUDTRAIL_SEGMENT: &str = "CloudTrail";

/// Delimiter separating path segments.
pub const DELIMITER: char = '/';

/// A bucket and a key prefix inside it.
///
/// A non-empty prefix always ends with `/`. Prefixes only grow through
/// [`child`](StorageLocation::child), one segment at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageLocation {
    /// Bucket name
    pub bucket: String,

    /// Key prefix, empty for the bucket root
    pub prefix: String,
}

impl StorageLocation {
    /// Location of the bucket root.
    pub fn root(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: String::new(),
        }
    }

    /// Location of the CloudTrail logs root (`AWSLogs/`) in `bucket`.
    pub fn logs_root(bucket: impl Into<String>) -> Self {
        Self::root(bucket).child(LOGS_ROOT_SEGMENT)
    }

    /// Location one segment below this one.
    pub fn child(&self, segment: &str) -> Self {
        let mut prefix = String::with_capacity(self.prefix.len() + segment.len() + 1);
        prefix.push_str(&self.prefix);
        prefix.push_str(segment);
        prefix.push(DELIMITER);
        Self {
            bucket: self.bucket.clone(),
            prefix,
        }
    }

    /// The `s3://` URI of this location, without a trailing delimiter.
    pub fn uri(&self) -> String {
        let path = self.prefix.trim_end_matches(DELIMITER);
        if path.is_empty() {
            format!("s3://{}", self.bucket)
        } else {
            format!("s3://{}/{}", self.bucket, path)
        }
    }

    /// The `s3://` URI of this location, keeping the trailing delimiter.
    ///
    /// Used as a table location, where Athena expects a folder.
    pub fn folder_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefix)
    }
}
