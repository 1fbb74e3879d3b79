use crate::core::filter::filter_articles;
use crate::domain::model::Article;
use crate::domain::ports::ArticleSource;
use crate::utils::error::Result;

pub const DEFAULT_PAGE_SIZE: usize = 20;
/// NewsAPI rejects larger `pageSize` values.
pub const MAX_PAGE_SIZE: usize = 100;

/// Rows from the end of the visible list at which the next page is requested.
const PREFETCH_DISTANCE: usize = 3;

/// Accumulated article pages plus the search-filtered view shown to the reader.
///
/// `has_more_pages` is a heuristic: it is true whenever the most recent page
/// came back full. The server's total is not consulted, so the last page of
/// an exactly divisible result set still reports more pages.
#[derive(Debug, Clone)]
pub struct PagedFeed {
    page_size: usize,
    current_page: usize,
    articles: Vec<Article>,
    visible: Vec<Article>,
    search: String,
    has_more_pages: bool,
}

impl PagedFeed {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 0,
            articles: Vec::new(),
            visible: Vec::new(),
            search: String::new(),
            has_more_pages: true,
        }
    }

    /// Reloads page 1, replacing everything accumulated so far.
    pub async fn refresh<A: ArticleSource + ?Sized>(&mut self, source: &A) -> Result<usize> {
        let page = source.fetch_page(1, self.page_size).await?;
        self.articles = page;
        self.current_page = 1;
        Ok(self.after_fetch(self.articles.len()))
    }

    /// Appends the next page. On error nothing changes, so the same page is
    /// requested again on the next call.
    pub async fn load_next_page<A: ArticleSource + ?Sized>(&mut self, source: &A) -> Result<usize> {
        let next = self.current_page + 1;
        let page = source.fetch_page(next, self.page_size).await?;
        let fetched = page.len();
        self.articles.extend(page);
        self.current_page = next;
        Ok(self.after_fetch(fetched))
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.apply_filter();
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn visible(&self) -> &[Article] {
        &self.visible
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    /// True when `row` (an index into `visible()`) is close enough to the end
    /// that the next page should be requested.
    pub fn should_load_more(&self, row: usize) -> bool {
        self.has_more_pages && self.visible.len().checked_sub(PREFETCH_DISTANCE) == Some(row)
    }

    fn after_fetch(&mut self, fetched: usize) -> usize {
        self.has_more_pages = fetched == self.page_size;
        self.apply_filter();
        tracing::debug!(
            "Page {} loaded: {} fetched, {} total, {} visible, more pages: {}",
            self.current_page,
            fetched,
            self.articles.len(),
            self.visible.len(),
            self.has_more_pages
        );
        fetched
    }

    fn apply_filter(&mut self) {
        self.visible = filter_articles(&self.articles, &self.search);
    }
}

impl Default for PagedFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
