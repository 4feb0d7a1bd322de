//! Dry-run executor that prints statements to stdout.

use async_trait::async_trait;
use ctp_error::{CtpError, Result};
use ctp_traits::QueryExecutor;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw SQL, statements separated by a blank line (default)
    #[default]
    Sql,

    /// JSON Lines format - one [`SubmittedStatement`] per line
    Jsonl,
}

/// A statement as printed in JSONL output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedStatement {
    /// 0-based position within the run
    pub sequence: usize,

    /// Statement text
    pub sql: String,
}

/// Prints every statement instead of submitting it.
pub struct StdoutExecutor {
    format: OutputFormat,
}

impl StdoutExecutor {
    /// Create a new StdoutExecutor with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a statement the way it is printed.
    pub fn render(&self, sequence: usize, sql: String) -> Result<String> {
        match self.format {
            OutputFormat::Sql => Ok(format!("{}\n", sql.trim())),
            OutputFormat::Jsonl => serde_json::to_string(&SubmittedStatement { sequence, sql })
                .map_err(|e| CtpError::submission(sequence, e)),
        }
    }
}

impl Default for StdoutExecutor {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

#[async_trait]
impl QueryExecutor for StdoutExecutor {
    async fn submit(&self, sequence: usize, sql: String) -> Result<String> {
        let output = self.render(sequence, sql)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{output}")
            .and_then(|_| stdout.flush())
            .map_err(|e| CtpError::submission(sequence, e))?;

        Ok(format!("dry-run-{sequence}"))
    }
}
