//! Configuration types for a partitioning run.

use serde::{Deserialize, Serialize};

/// Largest query string Athena accepts, in bytes.
pub const MAX_QUERY_LENGTH: usize = 262_144;

/// Table CloudTrail partitions are registered on.
pub const DEFAULT_TABLE: &str = "cloudtrail_logs";

/// Configuration for a partitioning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionerConfig {
    /// Bucket holding the CloudTrail logs
    pub bucket: String,

    /// Catalog table partitions are added to
    pub table: String,

    /// Upper bound on the length of each submitted statement
    pub max_query_length: usize,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            table: DEFAULT_TABLE.to_string(),
            max_query_length: MAX_QUERY_LENGTH,
        }
    }
}

impl PartitionerConfig {
    /// Create a new configuration for the given CloudTrail bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    /// Set the table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the statement length budget.
    pub fn with_max_query_length(mut self, max_query_length: usize) -> Self {
        self.max_query_length = max_query_length;
        self
    }
}
