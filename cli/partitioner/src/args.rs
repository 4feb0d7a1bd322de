//! CLI argument definitions for cloudtrail-partitioner.

use clap::{Parser, ValueEnum};

/// Register CloudTrail log partitions with Athena.
///
/// Walks `AWSLogs/<org-id>/<account>/CloudTrail/<region>/<year>/<month>/` in the
/// CloudTrail bucket, creates the `cloudtrail_logs` table if needed and adds
/// every discovered month folder as a partition.
///
/// ## Examples
///
/// Register everything:
///   cloudtrail-partitioner --cloudtrail my-trail --athena-results my-results/athena
///
/// Only the current month (e.g. from a monthly schedule):
///   cloudtrail-partitioner --cloudtrail my-trail --athena-results my-results --current-month
///
/// Preview the statements without running them:
///   cloudtrail-partitioner --cloudtrail my-trail --year 2024 --dry-run
#[derive(Parser, Debug)]
#[command(name = "cloudtrail-partitioner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Source ===
    /// S3 bucket holding the CloudTrail logs
    #[arg(long, env = "CTP_CLOUDTRAIL_BUCKET")]
    pub cloudtrail: Option<String>,

    /// Year to partition (e.g. 2024); all years when omitted
    #[arg(long)]
    pub year: Option<String>,

    /// Month to partition (01-12); all months when omitted
    #[arg(long)]
    pub month: Option<String>,

    /// Only partition the current month (UTC); excludes --year and --month
    #[arg(long)]
    pub current_month: bool,

    // === Athena ===
    /// S3 bucket/path for Athena query results
    #[arg(long, env = "CTP_ATHENA_RESULTS")]
    pub athena_results: Option<String>,

    /// Athena database the table lives in
    #[arg(long, default_value = "Default")]
    pub database: String,

    /// Table partitions are added to
    #[arg(long, default_value = "cloudtrail_logs")]
    pub table: String,

    /// Print statements to stdout instead of submitting them to Athena
    #[arg(long)]
    pub dry_run: bool,

    /// Statement format for --dry-run
    #[arg(long, value_enum, default_value = "sql")]
    pub output_format: OutputFormatArg,

    // === AWS ===
    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "CTP_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Custom Athena endpoint URL (for LocalStack)
    #[arg(long, env = "CTP_ATHENA_ENDPOINT")]
    pub athena_endpoint: Option<String>,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Raw SQL
    Sql,
    /// JSON Lines (one statement object per line)
    Jsonl,
}

impl From<OutputFormatArg> for ctp_partitioner::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Sql => ctp_partitioner::OutputFormat::Sql,
            OutputFormatArg::Jsonl => ctp_partitioner::OutputFormat::Jsonl,
        }
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
