use crate::domain::model::Article;

/// Case-insensitive substring search over title, description and source.
///
/// An empty query returns every article. Relative order is always kept.
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    if query.is_empty() {
        return articles.to_vec();
    }

    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| matches_query(article, &needle))
        .cloned()
        .collect()
}

fn matches_query(article: &Article, needle: &str) -> bool {
    [article.title(), article.description(), article.source()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Vec<Article> {
        vec![
            Article::new("Rust 2.0 released", "Compiler news", "Tech News").with_id("a"),
            Article::new("Local team wins", "A dramatic final", "Sports Central").with_id("b"),
            Article::new("Markets rally", "Stocks up again", "Financial Times").with_id("c"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let articles = fixtures();
        assert_eq!(filter_articles(&articles, ""), articles);
    }

    #[test]
    fn test_source_only_match() {
        let result = filter_articles(&fixtures(), "financial");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "c");
    }

    #[test]
    fn test_case_insensitive_title_and_description() {
        let articles = fixtures();
        assert_eq!(filter_articles(&articles, "RUST")[0].id(), "a");
        assert_eq!(filter_articles(&articles, "Dramatic")[0].id(), "b");
    }

    #[test]
    fn test_order_is_preserved_for_multiple_matches() {
        let ids: Vec<String> = filter_articles(&fixtures(), "s")
            .iter()
            .map(|a| a.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_articles(&fixtures(), "volcano").is_empty());
    }
}
