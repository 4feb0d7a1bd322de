//! Recording executor for tests.

use async_trait::async_trait;
use ctp_error::{CtpError, Result};
use ctp_traits::QueryExecutor;
use std::sync::{Mutex, PoisonError};

/// Keeps every submitted statement in memory.
///
/// Optionally fails the submission at a given sequence number; statements
/// before it stay recorded.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<String>>,
    fail_at: Option<usize>,
}

impl RecordingExecutor {
    /// Create an executor that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the submission with this sequence number.
    pub fn failing_at(sequence: usize) -> Self {
        Self {
            statements: Mutex::default(),
            fail_at: Some(sequence),
        }
    }

    /// Statements accepted so far, in submission order.
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn submit(&self, sequence: usize, sql: String) -> Result<String> {
        if self.fail_at == Some(sequence) {
            return Err(CtpError::submission(sequence, "injected submission failure"));
        }

        let mut statements = self.statements.lock().unwrap_or_else(PoisonError::into_inner);
        statements.push(sql);
        Ok(format!("recorded-{}", statements.len() - 1))
    }
}
