//! Core types for the CloudTrail partitioner.
//!
//! This crate provides the data passed between discovery and batching:
//! - [`StorageLocation`] - Bucket plus a `/`-terminated key prefix
//! - [`OrganizationContext`] - The organization id found under the logs root
//! - [`PartitionDescriptor`] - One discovered (account, region, year, month) leaf

pub mod location;
pub mod partition;

pub use location::*;
pub use partition::*;
