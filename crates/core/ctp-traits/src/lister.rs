//! Directory-style listing trait.

use async_trait::async_trait;
use ctp_error::Result;

/// Lists the immediate "directories" below a prefix.
///
/// Implementations hide pagination: a single call returns every child, in the
/// order the backing store produced them.
#[async_trait]
pub trait PathLister: Send + Sync {
    /// Returns the bare child segment names directly under `prefix`.
    ///
    /// Names carry neither `prefix` nor the trailing `/`. An empty `prefix`
    /// lists the bucket root. Any failure is returned as
    /// [`CtpError::Listing`](ctp_error::CtpError::Listing).
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;
}
