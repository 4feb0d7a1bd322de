//! Main execution logic for the cloudtrail-partitioner CLI.

use anyhow::Result;
use chrono::Utc;
use ctp_error::CtpError;
use ctp_partitioner::{
    AthenaConfig, AthenaExecutor, AwsConfig, PartitionScope, PartitionStats, Partitioner,
    PartitionerConfig, S3Config, S3PathLister, StdoutExecutor, create_athena_client,
    create_s3_client, load_aws_config,
};
use ctp_traits::QueryExecutor;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr); // Log to stderr so stdout only carries results

    subscriber.init();

    Ok(())
}

/// The single line printed to stderr when a run fails.
///
/// Only the top-level message is shown. Listing and submission errors already
/// carry their cause in that message, so the source chain is not repeated.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {err}")
}

/// Flags checked before any AWS client is created.
#[derive(Debug)]
struct Settings {
    bucket: String,
    athena_results: Option<String>,
    scope: PartitionScope,
}

impl Settings {
    fn from_cli(args: &Cli) -> Result<Self, CtpError> {
        let bucket = non_empty(args.cloudtrail.as_deref())
            .ok_or_else(|| CtpError::Config("--cloudtrail is a required parameter".to_string()))?;

        let athena_results = non_empty(args.athena_results.as_deref());
        if athena_results.is_none() && !args.dry_run {
            return Err(CtpError::Config(
                "--athena-results is a required parameter".to_string(),
            ));
        }

        let scope = PartitionScope::from_flags(
            args.year.as_deref(),
            args.month.as_deref(),
            args.current_month,
            Utc::now().date_naive(),
        )?;

        Ok(Self {
            bucket,
            athena_results,
            scope,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Execute the partitioner with the provided arguments.
pub async fn execute(args: Cli) -> Result<PartitionStats> {
    let settings = Settings::from_cli(&args)?;

    let mut aws_config = AwsConfig::new().with_region(&args.region);
    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        aws_config = aws_config.with_credentials(access_key, secret_key);
    }
    if let Some(profile) = &args.profile {
        aws_config = aws_config.with_profile(profile);
    }
    let sdk_config = load_aws_config(&aws_config).await;

    let mut s3_config = S3Config::new();
    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }
    let lister = S3PathLister::from_config(create_s3_client(&sdk_config, &s3_config), &s3_config);

    let config = PartitionerConfig::new(&settings.bucket).with_table(&args.table);

    if args.dry_run {
        let executor = StdoutExecutor::new(args.output_format.into());
        return run_partitioner(lister, executor, config, &settings.scope).await;
    }

    // Checked in Settings::from_cli when not a dry run.
    let results = settings.athena_results.unwrap_or_default();
    let mut athena_config = AthenaConfig::new(results).with_database(&args.database);
    if let Some(endpoint) = &args.athena_endpoint {
        athena_config = athena_config.with_endpoint(endpoint);
    }
    let executor = AthenaExecutor::new(
        create_athena_client(&sdk_config, &athena_config),
        &athena_config,
    );

    run_partitioner(lister, executor, config, &settings.scope).await
}

/// Run the partitioner with a specific executor type.
async fn run_partitioner<E: QueryExecutor>(
    lister: S3PathLister,
    executor: E,
    config: PartitionerConfig,
    scope: &PartitionScope,
) -> Result<PartitionStats> {
    let partitioner = Partitioner::new(lister, executor, config);
    let stats = partitioner.run(scope).await?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Cli {
        let mut argv = vec!["cloudtrail-partitioner"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_settings_require_cloudtrail() {
        let mut args = parse(&["--athena-results", "results"]);
        args.cloudtrail = None;

        let err = Settings::from_cli(&args).unwrap_err();
        assert!(err.to_string().contains("--cloudtrail"));
    }

    #[test]
    fn test_settings_require_athena_results_unless_dry_run() {
        let mut args = parse(&["--cloudtrail", "trail"]);
        args.athena_results = None;

        let err = Settings::from_cli(&args).unwrap_err();
        assert!(err.to_string().contains("--athena-results"));

        args.dry_run = true;
        let settings = Settings::from_cli(&args).unwrap();
        assert_eq!(settings.bucket, "trail");
        assert!(settings.athena_results.is_none());
    }

    #[test]
    fn test_settings_reject_current_month_with_year() {
        let args = parse(&[
            "--cloudtrail",
            "trail",
            "--athena-results",
            "results",
            "--current-month",
            "--year",
            "2024",
        ]);

        let err = Settings::from_cli(&args).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_settings_blank_values_count_as_missing() {
        let args = parse(&["--cloudtrail", "  ", "--athena-results", "results"]);
        assert!(Settings::from_cli(&args).is_err());
    }

    #[test]
    fn test_error_line_names_cause_once() {
        let err = anyhow::Error::from(CtpError::listing("trail", "AWSLogs/", "AccessDenied"));

        let line = error_line(&err);

        assert_eq!(line, "Error: Listing s3://trail/AWSLogs/ failed: AccessDenied");
        assert_eq!(line.matches("AccessDenied").count(), 1);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_error_line_for_config_error() {
        let err = anyhow::Error::from(CtpError::Config("--cloudtrail is a required parameter".into()));

        assert_eq!(
            error_line(&err),
            "Error: Configuration error: --cloudtrail is a required parameter"
        );
    }

    #[tokio::test]
    async fn test_execute_fails_before_network_on_bad_flags() {
        let args = parse(&[
            "--cloudtrail",
            "trail",
            "--athena-results",
            "results",
            "--month",
            "13",
        ]);

        let err = execute(args).await.unwrap_err();
        let err = err.downcast::<CtpError>().unwrap();
        assert!(err.is_config());
    }
}
