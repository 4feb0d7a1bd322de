//! Full runs against LocalStack S3 with a recording executor.

use crate::common::LocalStackTestContext;
use ctp_partitioner::{
    AwsConfig, PartitionScope, Partitioner, PartitionerConfig, RecordingExecutor, S3Config,
    S3PathLister, create_s3_client, load_aws_config,
};

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_partitions_localstack_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-ctp-partitioner";
    ctx.create_bucket(bucket).await.unwrap();
    for key in [
        "AWSLogs/o-xyz/111111111111/CloudTrail/us-east-1/2024/01/02/a.json.gz",
        "AWSLogs/o-xyz/111111111111/CloudTrail/us-east-1/2024/02/02/b.json.gz",
        "AWSLogs/o-xyz/222222222222/CloudTrail/eu-west-1/2024/02/05/c.json.gz",
    ] {
        ctx.put_empty(bucket, key).await.unwrap();
    }

    let sdk_config = load_aws_config(
        &AwsConfig::new()
            .with_region(&ctx.region)
            .with_credentials("test", "test"),
    )
    .await;
    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let lister = S3PathLister::new(create_s3_client(&sdk_config, &s3_config));

    let partitioner = Partitioner::new(lister, RecordingExecutor::new(), PartitionerConfig::new(bucket));
    let stats = partitioner.run(&PartitionScope::all()).await.unwrap();

    assert_eq!(stats.org_id.as_deref(), Some("o-xyz"));
    assert_eq!(stats.partitions, 3);
    assert_eq!(stats.accounts, 2);

    let statements = partitioner.executor().statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[1].contains(&format!(
        "LOCATION 's3://{bucket}/AWSLogs/o-xyz/222222222222/CloudTrail/eu-west-1/2024/02'"
    )));

    ctx.delete_prefix(bucket, "AWSLogs/").await.ok();
}
