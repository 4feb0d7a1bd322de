//! S3 client configuration and creation.

use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};

use super::lister::DEFAULT_PAGE_SIZE;

/// Configuration for S3 access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Custom endpoint URL (for LocalStack)
    pub endpoint: Option<String>,

    /// `MaxKeys` sent with each list request
    pub page_size: i32,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl S3Config {
    /// Create a configuration using the regular AWS endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom endpoint (for LocalStack).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the list page size.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Create an S3 client from shared SDK settings.
///
/// A custom endpoint switches to path-style addressing, which LocalStack
/// requires.
pub fn create_s3_client(sdk_config: &SdkConfig, config: &S3Config) -> Client {
    let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);

    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_config_builder() {
        let config = S3Config::new()
            .with_endpoint("http://localhost:4566")
            .with_page_size(1000);

        assert_eq!(config.endpoint, Some("http://localhost:4566".to_string()));
        assert_eq!(config.page_size, 1000);
    }

    #[test]
    fn test_s3_config_default() {
        let config = S3Config::default();

        assert!(config.endpoint.is_none());
        assert_eq!(config.page_size, 50);
    }
}
