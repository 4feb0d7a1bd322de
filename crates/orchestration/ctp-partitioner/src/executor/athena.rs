//! Athena query submission.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_athena::Client;
use aws_sdk_athena::error::DisplayErrorContext;
use aws_sdk_athena::types::{QueryExecutionContext, ResultConfiguration};
use ctp_error::{CtpError, Result};
use ctp_traits::QueryExecutor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Catalog database statements run against.
pub const DEFAULT_DATABASE: &str = "Default";

/// Configuration for Athena submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaConfig {
    /// Bucket and optional path for query results, with or without `s3://`
    pub results_location: String,

    /// Database set as the query execution context
    pub database: String,

    /// Custom endpoint URL (for LocalStack)
    pub endpoint: Option<String>,
}

impl AthenaConfig {
    /// Create a new AthenaConfig with the required results location.
    pub fn new(results_location: impl Into<String>) -> Self {
        Self {
            results_location: results_location.into(),
            database: DEFAULT_DATABASE.to_string(),
            endpoint: None,
        }
    }

    /// Set the database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set a custom endpoint (for LocalStack).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Results location as an `s3://` URI.
    pub fn output_location(&self) -> String {
        if self.results_location.starts_with("s3://") {
            self.results_location.clone()
        } else {
            format!("s3://{}", self.results_location)
        }
    }
}

/// Create an Athena client from shared SDK settings.
pub fn create_athena_client(sdk_config: &SdkConfig, config: &AthenaConfig) -> Client {
    let mut builder = aws_sdk_athena::config::Builder::from(sdk_config);

    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint);
    }

    Client::from_conf(builder.build())
}

/// Submits statements to Athena without waiting for them to complete.
pub struct AthenaExecutor {
    client: Client,
    database: String,
    output_location: String,
}

impl AthenaExecutor {
    /// Create an executor from a client and configuration.
    pub fn new(client: Client, config: &AthenaConfig) -> Self {
        Self {
            client,
            database: config.database.clone(),
            output_location: config.output_location(),
        }
    }
}

#[async_trait]
impl QueryExecutor for AthenaExecutor {
    async fn submit(&self, sequence: usize, sql: String) -> Result<String> {
        let len = sql.len();
        let context = QueryExecutionContext::builder()
            .database(&self.database)
            .build();
        let result_configuration = ResultConfiguration::builder()
            .output_location(&self.output_location)
            .build();

        let resp = self
            .client
            .start_query_execution()
            .query_string(sql)
            .query_execution_context(context)
            .result_configuration(result_configuration)
            .send()
            .await
            .map_err(|e| CtpError::submission(sequence, DisplayErrorContext(&e).to_string()))?;

        let execution_id = resp.query_execution_id().unwrap_or_default().to_string();
        debug!(
            sequence,
            len,
            execution_id = %execution_id,
            "Started query execution"
        );

        Ok(execution_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athena_config_builder() {
        let config = AthenaConfig::new("query-results/athena")
            .with_database("audit")
            .with_endpoint("http://localhost:4566");

        assert_eq!(config.database, "audit");
        assert_eq!(config.endpoint, Some("http://localhost:4566".to_string()));
    }

    #[test]
    fn test_athena_config_defaults() {
        let config = AthenaConfig::new("query-results");

        assert_eq!(config.database, "Default");
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_output_location_adds_scheme_once() {
        assert_eq!(
            AthenaConfig::new("query-results/athena").output_location(),
            "s3://query-results/athena"
        );
        assert_eq!(
            AthenaConfig::new("s3://query-results/").output_location(),
            "s3://query-results/"
        );
    }
}
