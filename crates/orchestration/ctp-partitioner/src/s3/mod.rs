//! S3 client and directory-style listing.
//!
//! - [`S3PathLister`] - Paginated `ListObjectsV2` with a `/` delimiter
//! - [`InMemoryLister`] - Map-backed lister for tests and local runs

mod client;
mod lister;
mod memory;

pub use client::{S3Config, create_s3_client};
pub use lister::{DEFAULT_PAGE_SIZE, S3PathLister};
pub use memory::InMemoryLister;
