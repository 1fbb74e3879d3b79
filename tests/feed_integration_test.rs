use anyhow::Result;
use news_reader::{FavoritesStore, MemoryStorage, NewsClient, NewsConfig, PagedFeed};

fn offline_client() -> Result<NewsClient<NewsConfig>> {
    Ok(NewsClient::new(NewsConfig::default())?)
}

#[tokio::test]
async fn test_sample_pages_have_sequential_ids() -> Result<()> {
    let client = offline_client()?;
    let mut feed = PagedFeed::new(20);

    feed.refresh(&client).await?;
    let first: Vec<String> = feed.articles().iter().map(|a| a.id().to_string()).collect();
    let expected: Vec<String> = (0..20).map(|n| format!("sample-{}", n)).collect();
    assert_eq!(first, expected);

    feed.load_next_page(&client).await?;
    let second: Vec<String> = feed.articles()[20..].iter().map(|a| a.id().to_string()).collect();
    let expected: Vec<String> = (20..40).map(|n| format!("sample-{}", n)).collect();
    assert_eq!(second, expected);

    // 內容池長度為 15，第 15 筆回到第一個標題
    assert_eq!(feed.articles()[15].title(), feed.articles()[0].title());
    assert!(feed.has_more_pages());
    Ok(())
}

#[tokio::test]
async fn test_search_then_favorite_visible_article() -> Result<()> {
    let client = offline_client()?;
    let favorites = FavoritesStore::new(MemoryStorage::new());
    let mut feed = PagedFeed::new(20);

    feed.refresh(&client).await?;
    feed.set_search("weather channel");

    let visible = feed.visible().to_vec();
    let ids: Vec<&str> = visible.iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["sample-14"]);

    favorites.add(&visible[0]).await?;
    feed.clear_search();

    let flags = favorites.mark(feed.visible()).await;
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    assert!(flags[14]);

    // 重新整理後收藏依然存在
    feed.refresh(&client).await?;
    assert!(favorites.contains(&feed.visible()[14]).await);
    Ok(())
}
