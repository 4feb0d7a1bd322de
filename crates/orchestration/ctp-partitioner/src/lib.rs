//! ctp-partitioner - CloudTrail partition discovery for Athena.
//!
//! This crate walks the folder layout CloudTrail organization trails write to
//! S3 and registers every `(account, region, year, month)` folder as a
//! partition of an Athena table:
//!
//! - Directory-style S3 listing with pagination
//! - Depth-first partition discovery with optional year/month pinning
//! - Greedy packing of partitions into size-bounded `ALTER TABLE` statements
//! - Submission to Athena, or printing to stdout for dry runs
//!
//! # Example
//!
//! ```ignore
//! use ctp_partitioner::{
//!     AthenaConfig, AthenaExecutor, AwsConfig, PartitionScope, Partitioner,
//!     PartitionerConfig, S3Config, S3PathLister, create_athena_client,
//!     create_s3_client, load_aws_config,
//! };
//!
//! let sdk_config = load_aws_config(&AwsConfig::new().with_region("us-east-1")).await;
//! let athena_config = AthenaConfig::new("my-athena-results");
//!
//! let lister = S3PathLister::new(create_s3_client(&sdk_config, &S3Config::new()));
//! let executor = AthenaExecutor::new(
//!     create_athena_client(&sdk_config, &athena_config),
//!     &athena_config,
//! );
//!
//! let partitioner = Partitioner::new(lister, executor, PartitionerConfig::new("my-trail"));
//! let stats = partitioner.run(&PartitionScope::all()).await?;
//! println!("{} partitions processed", stats.partitions);
//! ```

pub mod aws;
pub mod batch;
pub mod config;
pub mod ddl;
pub mod executor;
pub mod partitioner;
pub mod s3;
pub mod scope;
pub mod stats;
pub mod walker;

pub use aws::{AwsConfig, load_aws_config};
pub use batch::{StatementBatcher, batch, render_clause, statement_prefix};
pub use config::{DEFAULT_TABLE, MAX_QUERY_LENGTH, PartitionerConfig};
pub use ddl::create_table_sql;
pub use executor::{
    AthenaConfig, AthenaExecutor, OutputFormat, RecordingExecutor, StdoutExecutor,
    create_athena_client,
};
pub use partitioner::Partitioner;
pub use s3::{InMemoryLister, S3Config, S3PathLister, create_s3_client};
pub use scope::{LevelSelection, PartitionScope};
pub use stats::PartitionStats;
pub use walker::{PartitionWalker, discover_org};
