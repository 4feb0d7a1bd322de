//! In-memory lister for tests and local development.

use async_trait::async_trait;
use ctp_error::{CtpError, Result};
use ctp_traits::PathLister;
use ctp_types::DELIMITER;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

/// A [`PathLister`] backed by a map from prefix to children.
///
/// Children keep insertion order. Every call is recorded so tests can check
/// which prefixes were listed and in what order. Unknown prefixes list as
/// empty, matching S3.
#[derive(Debug, Default)]
pub struct InMemoryLister {
    children: HashMap<String, Vec<String>>,
    failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryLister {
    /// Create an empty lister.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lister from full object keys.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        keys.into_iter()
            .fold(Self::new(), |lister, key| lister.with_object(key))
    }

    /// Register an object key, creating every folder on its path.
    pub fn with_object(mut self, key: &str) -> Self {
        let mut prefix = String::new();
        let mut rest = key;

        while let Some(pos) = rest.find(DELIMITER) {
            let segment = &rest[..pos];
            let children = self.children.entry(prefix.clone()).or_default();
            if !children.iter().any(|c| c == segment) {
                children.push(segment.to_string());
            }

            prefix.push_str(segment);
            prefix.push(DELIMITER);
            rest = &rest[pos + 1..];
        }

        self
    }

    /// Set the children of `prefix` explicitly.
    pub fn with_children(mut self, prefix: impl Into<String>, children: &[&str]) -> Self {
        self.children.insert(
            prefix.into(),
            children.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    /// Make every listing of `prefix` fail.
    pub fn with_failure(mut self, prefix: impl Into<String>) -> Self {
        self.failures.insert(prefix.into());
        self
    }

    /// Prefixes listed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PathLister for InMemoryLister {
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prefix.to_string());

        if self.failures.contains(prefix) {
            return Err(CtpError::listing(bucket, prefix, "injected listing failure"));
        }

        Ok(self.children.get(prefix).cloned().unwrap_or_default())
    }
}
