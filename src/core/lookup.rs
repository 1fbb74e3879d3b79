use crate::domain::model::Article;
use crate::domain::ports::ArticleSource;
use crate::utils::error::{NewsError, Result};
use std::fmt;

/// Picks one article out of a fetched page.
///
/// Live articles without an `id` get a fresh one on every fetch, so only
/// `Row` (1-based position on the page) finds them again after a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRef {
    Id(String),
    Row(usize),
}

impl fmt::Display for ArticleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleRef::Id(id) => write!(f, "{}", id),
            ArticleRef::Row(row) => write!(f, "row {}", row),
        }
    }
}

impl ArticleRef {
    fn pick(&self, articles: Vec<Article>) -> Option<Article> {
        match self {
            ArticleRef::Id(id) => articles.into_iter().find(|article| article.id() == id),
            ArticleRef::Row(row) => row
                .checked_sub(1)
                .and_then(|index| articles.into_iter().nth(index)),
        }
    }
}

/// `(page, row)` of the article at `index` (0-based) in a list built from
/// consecutive full pages, the way `PagedFeed` accumulates them.
pub fn position_of(index: usize, page_size: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    (index / page_size + 1, index % page_size + 1)
}

/// Fetches `page` and returns the referenced article.
pub async fn find_on_page<A: ArticleSource>(
    source: &A,
    reference: &ArticleRef,
    page: usize,
    page_size: usize,
) -> Result<Article> {
    let articles = source.fetch_page(page, page_size).await?;
    tracing::debug!("Looking up {} among {} articles on page {}", reference, articles.len(), page);

    reference
        .pick(articles)
        .ok_or_else(|| NewsError::ArticleNotFound {
            id: reference.to_string(),
            page,
        })
}
