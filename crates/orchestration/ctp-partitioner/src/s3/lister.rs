//! Directory-style S3 listing with pagination.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use ctp_error::{CtpError, Result};
use ctp_traits::PathLister;
use ctp_types::DELIMITER;
use tracing::debug;

use super::client::S3Config;

/// Keys requested per `ListObjectsV2` page.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// Lists common prefixes under a prefix using `ListObjectsV2`.
///
/// Every page is drained before returning. The page size only shapes the
/// requests; it never limits the number of children returned.
#[derive(Debug, Clone)]
pub struct S3PathLister {
    client: Client,
    page_size: i32,
}

impl S3PathLister {
    /// Create a lister with the default page size.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a lister from an S3 configuration.
    pub fn from_config(client: Client, config: &S3Config) -> Self {
        Self {
            client,
            page_size: config.page_size,
        }
    }
}

/// One `ListObjectsV2` response, reduced to what the lister needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListPage {
    /// Common prefixes as returned by S3, still carrying the listed prefix
    pub common_prefixes: Vec<String>,

    /// Token for the next page; `None` once the listing is complete
    pub next_token: Option<String>,
}

impl From<ListObjectsV2Output> for ListPage {
    fn from(resp: ListObjectsV2Output) -> Self {
        let common_prefixes = resp
            .common_prefixes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|cp| cp.prefix)
            .collect();

        // A truncated page without a token cannot be continued.
        let next_token = if resp.is_truncated == Some(true) {
            resp.next_continuation_token
        } else {
            None
        };

        Self {
            common_prefixes,
            next_token,
        }
    }
}

/// Follow continuation tokens until `fetch` reports the last page.
///
/// `fetch` receives the token for the page to request, `None` for the first
/// one. Returns the child names under `prefix` in listing order along with
/// the number of pages fetched.
pub(crate) async fn drain_pages<F, Fut>(
    prefix: &str,
    mut fetch: F,
) -> Result<(Vec<String>, usize)>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListPage>>,
{
    let mut children = Vec::new();
    let mut continuation_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(continuation_token.take()).await?;
        pages += 1;

        children.extend(
            page.common_prefixes
                .iter()
                .filter_map(|cp| child_name(prefix, cp)),
        );

        match page.next_token {
            Some(token) => continuation_token = Some(token),
            None => break,
        }
    }

    Ok((children, pages))
}

#[async_trait]
impl PathLister for S3PathLister {
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let (children, pages) = drain_pages(prefix, |token| {
            let req = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .prefix(prefix)
                .delimiter(DELIMITER.to_string())
                .max_keys(self.page_size)
                .set_continuation_token(token);

            async move {
                let resp = req.send().await.map_err(|e| {
                    CtpError::listing(bucket, prefix, DisplayErrorContext(&e).to_string())
                })?;
                Ok::<_, CtpError>(ListPage::from(resp))
            }
        })
        .await?;

        debug!(
            bucket = bucket,
            prefix = prefix,
            pages,
            children = children.len(),
            "Listed prefix"
        );

        Ok(children)
    }
}

/// Reduce a common prefix returned for `prefix` to its bare segment name.
///
/// `AWSLogs/o-abc/` listed under `AWSLogs/` becomes `o-abc`.
pub(crate) fn child_name(prefix: &str, common_prefix: &str) -> Option<String> {
    let relative = common_prefix.strip_prefix(prefix).unwrap_or(common_prefix);
    let name = relative.strip_suffix(DELIMITER).unwrap_or(relative);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
