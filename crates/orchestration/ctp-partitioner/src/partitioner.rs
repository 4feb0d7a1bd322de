//! Main Partitioner implementation.

use ctp_error::Result;
use ctp_traits::{PathLister, QueryExecutor};
use futures::{StreamExt, pin_mut};
use tracing::{debug, info};

use crate::batch::{StatementBatcher, render_clause};
use crate::config::PartitionerConfig;
use crate::ddl::create_table_sql;
use crate::scope::PartitionScope;
use crate::stats::PartitionStats;
use crate::walker::{PartitionWalker, discover_org};

/// Coordinates discovery, batching and submission for one run.
///
/// Generic over the lister and executor so the same run logic drives S3 and
/// Athena in production and in-memory implementations in tests.
pub struct Partitioner<L: PathLister, E: QueryExecutor> {
    lister: L,
    executor: E,
    config: PartitionerConfig,
}

impl<L: PathLister, E: QueryExecutor> Partitioner<L, E> {
    /// Create a new Partitioner.
    pub fn new(lister: L, executor: E, config: PartitionerConfig) -> Self {
        Self {
            lister,
            executor,
            config,
        }
    }

    /// Run discovery and register every partition found.
    ///
    /// Steps, each fatal on failure:
    /// 1. find the organization folder
    /// 2. submit the table definition
    /// 3. stream partitions into batched `ALTER TABLE` statements, submitting
    ///    each as soon as it is full
    /// 4. submit the trailing statement, even when it holds no partition
    ///
    /// Statements already submitted when a later step fails stay submitted.
    pub async fn run(&self, scope: &PartitionScope) -> Result<PartitionStats> {
        let mut stats = PartitionStats::new();
        let mut batcher = StatementBatcher::new(&self.config.table, self.config.max_query_length)?;

        info!(
            bucket = %self.config.bucket,
            table = %self.config.table,
            year = ?scope.year.fixed(),
            month = ?scope.month.fixed(),
            "Starting partition discovery"
        );

        let org = discover_org(&self.lister, &self.config.bucket).await?;
        stats.org_id = Some(org.org_id.clone());

        let ddl = create_table_sql(&self.config.table, &org.location);
        self.submit(&mut stats, ddl).await?;

        let walker = PartitionWalker::new(&self.lister, &org, scope);
        let partitions = walker.partitions();
        pin_mut!(partitions);

        while let Some(partition) = partitions.next().await {
            let partition = partition?;
            debug!(
                account = %partition.account,
                region = %partition.region,
                year = %partition.year,
                month = %partition.month,
                "Discovered partition"
            );

            stats.record_partition(&partition);
            if let Some(statement) = batcher.push(&render_clause(&partition))? {
                self.submit(&mut stats, statement).await?;
            }
        }

        self.submit(&mut stats, batcher.finish()).await?;
        stats.complete();

        info!(
            org_id = %org.org_id,
            accounts = stats.accounts,
            regions = stats.regions,
            partitions = stats.partitions,
            statements = stats.statements_submitted,
            "Partition discovery completed"
        );

        Ok(stats)
    }

    async fn submit(&self, stats: &mut PartitionStats, sql: String) -> Result<()> {
        let sequence = stats.statements_submitted;
        debug!(sequence, len = sql.len(), "Submitting statement");
        self.executor.submit(sequence, sql).await?;
        stats.record_statement();
        Ok(())
    }

    /// Get the lister.
    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Get the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }
}
