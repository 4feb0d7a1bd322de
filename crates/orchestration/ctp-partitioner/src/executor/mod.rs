//! Query executor implementations.
//!
//! - [`AthenaExecutor`] - Submits statements with `StartQueryExecution`
//! - [`StdoutExecutor`] - Prints statements instead of running them (dry run)
//! - [`RecordingExecutor`] - Keeps statements in memory for tests

mod athena;
mod memory;
mod stdout;

pub use athena::{AthenaConfig, AthenaExecutor, DEFAULT_DATABASE, create_athena_client};
pub use memory::RecordingExecutor;
pub use stdout::{OutputFormat, StdoutExecutor, SubmittedStatement};
