//! Statistics for partitioning runs.

use chrono::{DateTime, Duration, Utc};
use ctp_types::PartitionDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Statistics collected during a partitioning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Organization the partitions belong to
    pub org_id: Option<String>,

    /// Distinct accounts with at least one partition
    pub accounts: usize,

    /// Distinct (account, region) pairs with at least one partition
    pub regions: usize,

    /// Partition clauses rendered
    pub partitions: usize,

    /// Statements submitted, including the table definition
    pub statements_submitted: usize,

    #[serde(skip)]
    seen_accounts: HashSet<String>,

    #[serde(skip)]
    seen_regions: HashSet<(String, String)>,
}

impl PartitionStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record one discovered partition.
    pub fn record_partition(&mut self, partition: &PartitionDescriptor) {
        self.partitions += 1;

        if self.seen_accounts.insert(partition.account.clone()) {
            self.accounts += 1;
        }

        let region = (partition.account.clone(), partition.region.clone());
        if self.seen_regions.insert(region) {
            self.regions += 1;
        }
    }

    /// Record a submitted statement.
    pub fn record_statement(&mut self) {
        self.statements_submitted += 1;
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
