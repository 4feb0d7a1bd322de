//! Depth-first traversal of the CloudTrail folder hierarchy.
//!
//! ```text
//! AWSLogs/<org-id>/<account>/CloudTrail/<region>/<year>/<month>/
//! ```
//!
//! The org level is resolved once by [`discover_org`]. Below it,
//! [`PartitionWalker`] lists accounts and regions, and lists or pins years and
//! months according to the [`PartitionScope`]. It yields one
//! [`PartitionDescriptor`] per month folder.

use async_stream::try_stream;
use ctp_error::{CtpError, Result};
use ctp_traits::PathLister;
use ctp_types::{CLOUDTRAIL_SEGMENT, OrganizationContext, PartitionDescriptor, StorageLocation};
use futures::Stream;
use tracing::{debug, info};

use crate::scope::{LevelSelection, PartitionScope};

/// Find the single organization folder under `AWSLogs/`.
///
/// Zero `o-` children is [`CtpError::OrgNotFound`]. More than one is
/// [`CtpError::AmbiguousOrg`], since picking either would silently skip the
/// other's logs.
pub async fn discover_org<L: PathLister + ?Sized>(
    lister: &L,
    bucket: &str,
) -> Result<OrganizationContext> {
    let root = StorageLocation::logs_root(bucket);
    let children = lister.list(bucket, &root.prefix).await?;

    let mut candidates: Vec<String> = children
        .into_iter()
        .filter(|name| OrganizationContext::is_org_segment(name))
        .collect();

    match candidates.len() {
        0 => Err(CtpError::OrgNotFound {
            bucket: bucket.to_string(),
            prefix: root.prefix,
        }),
        1 => {
            let org_id = candidates.remove(0);
            let location = root.child(&org_id);
            info!(org_id = %org_id, location = %location.uri(), "Found organization");
            Ok(OrganizationContext { org_id, location })
        }
        _ => Err(CtpError::AmbiguousOrg {
            bucket: bucket.to_string(),
            candidates,
        }),
    }
}

/// Walks accounts, regions, years and months below an organization.
pub struct PartitionWalker<'a, L: PathLister + ?Sized> {
    lister: &'a L,
    org: &'a OrganizationContext,
    scope: &'a PartitionScope,
}

impl<'a, L: PathLister + ?Sized> PartitionWalker<'a, L> {
    /// Create a walker over `org` restricted to `scope`.
    pub fn new(lister: &'a L, org: &'a OrganizationContext, scope: &'a PartitionScope) -> Self {
        Self { lister, org, scope }
    }

    /// Stream every partition in depth-first order.
    ///
    /// The stream is single-pass: each poll may issue listing calls, and
    /// re-reading requires a new traversal. A listing failure is yielded once
    /// and ends the stream.
    pub fn partitions(&self) -> impl Stream<Item = Result<PartitionDescriptor>> + '_ {
        try_stream! {
            let bucket = self.org.location.bucket.as_str();

            for account in self.lister.list(bucket, &self.org.location.prefix).await? {
                let trail = self.org.location.child(&account).child(CLOUDTRAIL_SEGMENT);
                debug!(account = %account, "Walking account");

                for region in self.lister.list(bucket, &trail.prefix).await? {
                    let region_location = trail.child(&region);

                    for year in self.select(&self.scope.year, &region_location).await? {
                        let year_location = region_location.child(&year);

                        for month in self.select(&self.scope.month, &year_location).await? {
                            let location = year_location.child(&month);
                            yield PartitionDescriptor {
                                account: account.clone(),
                                region: region.clone(),
                                year: year.clone(),
                                month,
                                location,
                            };
                        }
                    }
                }
            }
        }
    }

    /// Values for one level: the pinned value, or the listed children of `parent`.
    async fn select(
        &self,
        selection: &LevelSelection,
        parent: &StorageLocation,
    ) -> Result<Vec<String>> {
        match selection {
            LevelSelection::Fixed(value) => Ok(vec![value.clone()]),
            LevelSelection::Enumerate => self.lister.list(&parent.bucket, &parent.prefix).await,
        }
    }
}
