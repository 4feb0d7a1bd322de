//! LocalStack test context and utilities.

use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;

/// LocalStack test context providing an S3 client.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "localstack",
            ))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create an S3 bucket for testing.
    pub async fn create_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Upload an empty object at `key`.
    pub async fn put_empty(&self, bucket: &str, key: &str) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from_static(b"{}"))
            .send()
            .await?;
        Ok(())
    }

    /// Delete every object under `prefix`.
    pub async fn delete_prefix(&self, bucket: &str, prefix: &str) -> Result<(), aws_sdk_s3::Error> {
        let resp = self
            .s3
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .send()
            .await?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                self.s3.delete_object().bucket(bucket).key(key).send().await?;
            }
        }
        Ok(())
    }
}
