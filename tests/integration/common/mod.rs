//! Shared helpers for integration tests.

mod localstack;

pub use localstack::LocalStackTestContext;
