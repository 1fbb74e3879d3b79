use crate::domain::model::Article;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const FAVORITES_KEY: &str = "FavoriteArticles";

/// Persisted favorites, de-duplicated by article id.
///
/// Every call reads the whole slot and every mutation writes the whole slot
/// back before returning. Missing or unreadable data counts as an empty set.
pub struct FavoritesStore<S: Storage> {
    storage: S,
}

impl<S: Storage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Vec<Article> {
        let data = match self.storage.read(FAVORITES_KEY).await {
            Ok(Some(data)) => data,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::debug!("Could not read favorites, treating as empty: {}", e);
                return Vec::new();
            }
        };

        serde_json::from_slice(&data).unwrap_or_else(|e| {
            tracing::debug!("Stored favorites are not valid JSON, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// No-op when an article with the same id is already stored.
    pub async fn add(&self, article: &Article) -> Result<()> {
        let mut favorites = self.list().await;
        if favorites.iter().any(|f| f.same_id(article)) {
            return Ok(());
        }

        favorites.push(article.clone());
        self.save(&favorites).await?;
        tracing::info!("⭐ Added '{}' to favorites", article.title());
        Ok(())
    }

    pub async fn remove(&self, article: &Article) -> Result<()> {
        let mut favorites = self.list().await;
        favorites.retain(|f| !f.same_id(article));
        self.save(&favorites).await
    }

    pub async fn contains(&self, article: &Article) -> bool {
        self.list().await.iter().any(|f| f.same_id(article))
    }

    /// Flips the favorite state and returns the new state.
    pub async fn toggle(&self, article: &Article) -> Result<bool> {
        if self.contains(article).await {
            self.remove(article).await?;
            Ok(false)
        } else {
            self.add(article).await?;
            Ok(true)
        }
    }

    /// Favorite flags for a displayed list, in the same order, from one read.
    /// Re-fetched live articles are recognised by `same_story`.
    pub async fn mark(&self, articles: &[Article]) -> Vec<bool> {
        let favorites = self.list().await;
        articles
            .iter()
            .map(|article| {
                favorites
                    .iter()
                    .any(|f| f.same_id(article) || f.same_story(article))
            })
            .collect()
    }

    /// The stored copy of `article` (matched by id, then by `same_story`),
    /// or `article` itself when it is not a favorite.
    pub async fn saved_copy(&self, article: Article) -> Article {
        let favorites = self.list().await;
        favorites
            .iter()
            .find(|f| f.same_id(&article))
            .or_else(|| favorites.iter().find(|f| f.same_story(&article)))
            .cloned()
            .unwrap_or(article)
    }

    async fn save(&self, favorites: &[Article]) -> Result<()> {
        let encoded = serde_json::to_vec(favorites)?;
        self.storage.write(FAVORITES_KEY, &encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;

    fn store() -> FavoritesStore<MemoryStorage> {
        FavoritesStore::new(MemoryStorage::new())
    }

    #[tokio::test]
    async fn test_empty_favorites() {
        assert!(store().list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_and_contains() {
        let favorites = store();
        let article = Article::new("Test Article", "Test Description", "Test Source");

        assert!(!favorites.contains(&article).await);
        favorites.add(&article).await.unwrap();
        assert!(favorites.contains(&article).await);
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_one_entry() {
        let favorites = store();
        let article = Article::new("Test Article", "Test Description", "Test Source");

        favorites.add(&article).await.unwrap();
        favorites.add(&article).await.unwrap();

        let stored = favorites.list().await;
        assert_eq!(stored.iter().filter(|f| f.same_id(&article)).count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_is_by_id_only() {
        let favorites = store();
        let original = Article::new("Old title", "d", "s").with_id("x");
        let edited = Article::new("New title", "d", "s").with_id("x");

        favorites.add(&original).await.unwrap();
        favorites.add(&edited).await.unwrap();

        let stored = favorites.list().await;
        assert_eq!(stored, vec![original]);
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let favorites = store();
        let kept = Article::new("Kept", "d", "s");
        favorites.add(&kept).await.unwrap();

        favorites
            .remove(&Article::new("Never added", "d", "s"))
            .await
            .unwrap();

        assert_eq!(favorites.list().await, vec![kept]);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let favorites = store();
        let first = Article::new("Article 1", "Desc 1", "Source 1");
        let second = Article::new("Article 2", "Desc 2", "Source 2");

        favorites.add(&first).await.unwrap();
        favorites.add(&second).await.unwrap();
        favorites.remove(&first).await.unwrap();
        favorites.add(&first).await.unwrap();

        assert_eq!(favorites.list().await, vec![second, first]);
    }

    #[tokio::test]
    async fn test_toggle_and_mark() {
        let favorites = store();
        let a = Article::new("A", "", "s");
        let b = Article::new("B", "", "s");

        assert!(favorites.toggle(&a).await.unwrap());
        assert_eq!(favorites.mark(&[a.clone(), b.clone()]).await, vec![true, false]);
        assert!(!favorites.toggle(&a).await.unwrap());
        assert_eq!(favorites.mark(&[a, b]).await, vec![false, false]);
    }

    #[tokio::test]
    async fn test_refetched_article_resolves_to_saved_copy() {
        let favorites = store();
        let fetch = || Article::new("Headline", "d", "Wire").with_published_at("2025-12-18T10:00:00Z");
        let first_fetch = fetch();
        let second_fetch = fetch();
        assert!(!first_fetch.same_id(&second_fetch));

        assert!(favorites.toggle(&first_fetch).await.unwrap());
        assert_eq!(favorites.mark(&[second_fetch.clone()]).await, vec![true]);
        let resolved = favorites.saved_copy(second_fetch).await;
        assert!(resolved.same_id(&first_fetch));
        assert!(!favorites.toggle(&resolved).await.unwrap());
        assert!(favorites.list().await.is_empty());

        let other = Article::new("Other", "d", "Wire");
        assert!(favorites.saved_copy(other.clone()).await.same_id(&other));
    }

    #[tokio::test]
    async fn test_corrupt_slot_reads_empty() {
        let storage = MemoryStorage::new();
        storage.write(FAVORITES_KEY, b"not json").await.unwrap();
        let favorites = FavoritesStore::new(storage);

        assert!(favorites.list().await.is_empty());

        // 下一次寫入會覆蓋壞掉的資料
        let article = Article::new("Fresh", "", "s");
        favorites.add(&article).await.unwrap();
        assert_eq!(favorites.list().await, vec![article]);
    }
}
