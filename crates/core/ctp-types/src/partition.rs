//! Organization and partition descriptors produced by discovery.

use serde::{Deserialize, Serialize};

use crate::location::StorageLocation;

/// Prefix every organization id segment starts with.
pub const ORG_ID_PREFIX: &str = "o-";

/// The organization whose trail is being partitioned.
///
/// Discovered once at the start of a run and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationContext {
    /// Organization id, e.g. `o-a1b2c3d4e5`
    pub org_id: String,

    /// Location of the organization folder (`AWSLogs/<org-id>/`)
    pub location: StorageLocation,
}

impl OrganizationContext {
    /// Returns true if `segment` names an organization folder.
    pub fn is_org_segment(segment: &str) -> bool {
        segment.starts_with(ORG_ID_PREFIX)
    }
}

/// One discovered partition leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionDescriptor {
    /// Account id
    pub account: String,

    /// AWS region, e.g. `us-east-1`
    pub region: String,

    /// Four digit year
    pub year: String,

    /// Two digit month
    pub month: String,

    /// Folder holding the partition's objects
    pub location: StorageLocation,
}
