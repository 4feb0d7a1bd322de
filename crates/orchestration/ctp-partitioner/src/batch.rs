//! Size-bounded batching of partition clauses into `ALTER TABLE` statements.
//!
//! Clauses are packed greedily in arrival order. A statement is finished as
//! soon as the next clause would push it past the budget, so every statement
//! stays within the budget and no clause is ever split or reordered.

use ctp_error::{CtpError, Result};
use ctp_types::PartitionDescriptor;

/// Render the `PARTITION (...) LOCATION '...'` clause for one partition.
///
/// The clause starts with a space so it can be appended directly after the
/// statement prefix or a previous clause. Folder names come straight from
/// S3 and may contain `'`, so every value is escaped as a SQL string literal.
pub fn render_clause(partition: &PartitionDescriptor) -> String {
    format!(
        " PARTITION (account='{}', region='{}', year='{}', month='{}') LOCATION '{}'",
        escape_literal(&partition.account),
        escape_literal(&partition.region),
        escape_literal(&partition.year),
        escape_literal(&partition.month),
        escape_literal(&partition.location.uri())
    )
}

/// Escape a value for use inside a single-quoted SQL literal.
pub(crate) fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// The statement prefix every batch starts with.
pub fn statement_prefix(table: &str) -> String {
    format!("ALTER TABLE {table} ADD IF NOT EXISTS")
}

/// Greedy packer for partition clauses.
#[derive(Debug)]
pub struct StatementBatcher {
    prefix: String,
    budget: usize,
    buffer: String,
    remaining: usize,
    clauses: usize,
}

impl StatementBatcher {
    /// Create a batcher for `table` whose statements never exceed `budget` bytes.
    ///
    /// Fails if the budget cannot hold the statement prefix itself.
    pub fn new(table: &str, budget: usize) -> Result<Self> {
        let prefix = statement_prefix(table);
        if budget <= prefix.len() {
            return Err(CtpError::Config(format!(
                "statement budget of {budget} leaves no room after the {} character prefix",
                prefix.len()
            )));
        }

        let remaining = budget - prefix.len();
        let mut buffer = String::with_capacity(budget);
        buffer.push_str(&prefix);

        Ok(Self {
            prefix,
            budget,
            buffer,
            remaining,
            clauses: 0,
        })
    }

    /// Space available for clauses in an empty statement.
    pub fn capacity(&self) -> usize {
        self.budget - self.prefix.len()
    }

    /// Space left in the statement being built.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of clauses in the statement being built.
    pub fn pending_clauses(&self) -> usize {
        self.clauses
    }

    /// Append a clause.
    ///
    /// Returns the finished statement when the clause did not fit in the
    /// current one; the clause then opens the next statement. A clause longer
    /// than [`capacity`](Self::capacity) is rejected with
    /// [`CtpError::ClauseTooLarge`] and leaves the batcher unchanged.
    pub fn push(&mut self, clause: &str) -> Result<Option<String>> {
        let len = clause.len();
        if len > self.capacity() {
            return Err(CtpError::ClauseTooLarge {
                len,
                capacity: self.capacity(),
            });
        }

        let finished = if len > self.remaining {
            Some(self.take())
        } else {
            None
        };

        self.buffer.push_str(clause);
        self.remaining -= len;
        self.clauses += 1;

        Ok(finished)
    }

    /// Finish the last statement.
    ///
    /// Always returns a statement, even one with no clauses.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn take(&mut self) -> String {
        let mut fresh = String::with_capacity(self.budget);
        fresh.push_str(&self.prefix);
        self.remaining = self.capacity();
        self.clauses = 0;
        std::mem::replace(&mut self.buffer, fresh)
    }
}

/// Pack `clauses` into statements for `table`, all at once.
///
/// Equivalent to pushing every clause through a [`StatementBatcher`] and
/// finishing it, so the trailing statement is always present.
pub fn batch<I, S>(table: &str, budget: usize, clauses: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batcher = StatementBatcher::new(table, budget)?;
    let mut statements = Vec::new();

    for clause in clauses {
        if let Some(statement) = batcher.push(clause.as_ref())? {
            statements.push(statement);
        }
    }

    statements.push(batcher.finish());
    Ok(statements)
}
