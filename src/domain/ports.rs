use crate::domain::model::Article;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value slots holding whole JSON blobs. A missing key reads as `None`.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write(&self, key: &str, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What to do when a live response cannot be decoded as an articles list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeFailurePolicy {
    /// Return `NewsError::Decode` like any other fetch failure.
    #[default]
    Surface,
    /// Quietly substitute sample articles for the requested page.
    SampleFallback,
}

pub trait SourceSettings: Send + Sync {
    fn endpoint(&self) -> &str;
    /// `None` means no live endpoint is configured and sample data is served.
    fn api_key(&self) -> Option<&str>;
    fn country(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn decode_failure_policy(&self) -> DecodeFailurePolicy;
}

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch one page of articles. Pages start at 1.
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Article>>;
}
