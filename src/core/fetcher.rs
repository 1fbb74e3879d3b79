use crate::core::feed::MAX_PAGE_SIZE;
use crate::core::sample::sample_articles;
use crate::domain::model::{Article, ArticlesResponse};
use crate::domain::ports::{ArticleSource, DecodeFailurePolicy, SourceSettings};
use crate::utils::error::{NewsError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches article pages from a NewsAPI-style endpoint, or serves sample
/// articles when no API key is configured.
pub struct NewsClient<C: SourceSettings> {
    pub(crate) config: C,
    pub(crate) client: Client,
}

impl<C: SourceSettings> NewsClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn is_live(&self) -> bool {
        self.config.api_key().is_some()
    }

    fn request_url(&self, api_key: &str, page: usize, page_size: usize) -> Result<Url> {
        let mut url =
            Url::parse(self.config.endpoint()).map_err(|e| NewsError::InvalidRequest {
                message: format!("invalid endpoint '{}': {}", self.config.endpoint(), e),
            })?;

        url.query_pairs_mut()
            .append_pair("country", self.config.country())
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("apiKey", api_key);

        Ok(url)
    }

    async fn fetch_live(&self, api_key: &str, page: usize, page_size: usize) -> Result<Vec<Article>> {
        let url = self.request_url(api_key, page, page_size)?;

        // 不把 apiKey 寫進日誌
        tracing::debug!(
            "Requesting page {} (size {}) from {}",
            page,
            page_size,
            self.config.endpoint()
        );
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(NewsError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(NewsError::NoData);
        }

        match serde_json::from_slice::<ArticlesResponse>(&body) {
            Ok(decoded) => {
                tracing::debug!(
                    "Decoded {} articles (total reported: {:?})",
                    decoded.articles.len(),
                    decoded.total_results
                );
                Ok(decoded.articles)
            }
            Err(e) => match self.config.decode_failure_policy() {
                DecodeFailurePolicy::Surface => Err(NewsError::Decode(e)),
                DecodeFailurePolicy::SampleFallback => {
                    tracing::warn!("Failed to decode articles ({}), serving sample data", e);
                    sample_articles(page, page_size)
                }
            },
        }
    }
}

#[async_trait::async_trait]
impl<C: SourceSettings> ArticleSource for NewsClient<C> {
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Article>> {
        if page == 0 || page_size == 0 {
            return Err(NewsError::InvalidRequest {
                message: format!("page ({}) and page size ({}) must be at least 1", page, page_size),
            });
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(NewsError::InvalidRequest {
                message: format!("page size {} exceeds {}", page_size, MAX_PAGE_SIZE),
            });
        }

        match self.config.api_key() {
            Some(api_key) => self.fetch_live(api_key, page, page_size).await,
            None => {
                tracing::debug!("No API key configured, generating sample page {}", page);
                sample_articles(page, page_size)
            }
        }
    }
}
