//! S3PathLister tests against LocalStack.

use crate::common::LocalStackTestContext;
use ctp_partitioner::{S3Config, S3PathLister, create_s3_client};
use ctp_traits::PathLister;

async fn lister(ctx: &LocalStackTestContext, page_size: i32) -> S3PathLister {
    let sdk_config = ctp_partitioner::load_aws_config(
        &ctp_partitioner::AwsConfig::new()
            .with_region(&ctx.region)
            .with_credentials("test", "test"),
    )
    .await;
    let s3_config = S3Config::new()
        .with_endpoint(&ctx.endpoint)
        .with_page_size(page_size);
    S3PathLister::from_config(create_s3_client(&sdk_config, &s3_config), &s3_config)
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_lists_children_across_pages() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-ctp-lister";
    ctx.create_bucket(bucket).await.unwrap();

    let regions: Vec<String> = (0..7).map(|i| format!("region-{i}")).collect();
    for region in &regions {
        ctx.put_empty(
            bucket,
            &format!("AWSLogs/o-abc/111111111111/CloudTrail/{region}/2024/01/01/log.json.gz"),
        )
        .await
        .unwrap();
    }

    // Page size 2 forces four pages for seven children.
    let lister = lister(&ctx, 2).await;
    let mut children = lister
        .list(bucket, "AWSLogs/o-abc/111111111111/CloudTrail/")
        .await
        .unwrap();
    children.sort();

    assert_eq!(children, regions);
    assert_eq!(lister.list(bucket, "AWSLogs/").await.unwrap(), vec!["o-abc"]);

    ctx.delete_prefix(bucket, "AWSLogs/").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_bucket_is_listing_error() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let lister = lister(&ctx, 50).await;
    let err = lister
        .list("ctp-bucket-that-does-not-exist", "AWSLogs/")
        .await
        .unwrap_err();

    assert!(matches!(err, ctp_error::CtpError::Listing { .. }));
}
