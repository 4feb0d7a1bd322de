//! Query submission trait.

use async_trait::async_trait;
use ctp_error::Result;

/// Submits SQL statements for asynchronous execution.
///
/// Submission is fire-and-forget: the returned execution id is only logged,
/// never polled.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Submits one complete statement and returns its execution id.
    ///
    /// `sequence` is the 0-based position of the statement within the run.
    async fn submit(&self, sequence: usize, sql: String) -> Result<String>;
}
