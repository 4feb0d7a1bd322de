//! Capability traits for the CloudTrail partitioner.
//!
//! The partitioner talks to two external services, both behind traits so the
//! discovery and batching logic can run against in-memory implementations:
//! - [`PathLister`] - Directory-style listing of an object store
//! - [`QueryExecutor`] - Asynchronous SQL submission to the catalog engine

pub mod executor;
pub mod lister;

pub use executor::*;
pub use lister::*;
