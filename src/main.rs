use clap::Parser;
use news_reader::config::cli::{Command, FavoritesAction, SettingsAction};
use news_reader::utils::error::ErrorSeverity;
use news_reader::utils::{logger, validation::Validate};
use news_reader::core::lookup::position_of;
use news_reader::{
    find_on_page, Article, ArticleRef, ArticleSource, CliArgs, FavoritesStore, FileStorage,
    NewsClient, NewsConfig, PagedFeed, Result, SettingsStore,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<NewsConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            NewsConfig::from_file(path)?
        }
        None => NewsConfig::default(),
    };

    // 命令列參數優先於設定檔
    if let Some(data_dir) = &args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.source.api_key = Some(api_key.clone());
    }

    config.validate()?;
    tracing::debug!("Using endpoint {} (page size {})", config.source.endpoint, config.page_size());
    Ok(config)
}

async fn run(command: Command, mut config: NewsConfig) -> Result<()> {
    let storage = FileStorage::new(config.data_dir());

    match command {
        Command::Headlines {
            page_size: requested,
            pages,
            search,
        } => {
            if let Some(size) = requested {
                config.set_page_size(size)?;
            }
            let page_size = config.page_size();
            let client = NewsClient::new(config)?;
            if !client.is_live() {
                tracing::info!("🧪 No API key configured, showing sample headlines");
            }
            let favorites = FavoritesStore::new(storage);
            show_headlines(&client, &favorites, page_size, pages, search).await
        }
        Command::Favorites { action } => {
            let page_size = config.page_size();
            let favorites = FavoritesStore::new(storage);
            match action {
                FavoritesAction::List => {
                    let saved = favorites.list().await;
                    if saved.is_empty() {
                        println!("No favorite articles yet.");
                    }
                    for article in &saved {
                        print_article(article, None, true);
                    }
                    Ok(())
                }
                FavoritesAction::Add { target, page } => {
                    let reference = target.reference()?;
                    let client = NewsClient::new(config)?;
                    let fetched = find_on_page(&client, &reference, page, page_size).await?;
                    let article = favorites.saved_copy(fetched).await;
                    favorites.add(&article).await?;
                    println!("Added to favorites: {}", article.title());
                    Ok(())
                }
                FavoritesAction::Remove { id } => {
                    let saved = favorites.list().await;
                    match saved.iter().find(|a| a.id() == id) {
                        Some(article) => {
                            favorites.remove(article).await?;
                            println!("Removed from favorites: {}", article.title());
                        }
                        None => println!("'{}' is not a favorite", id),
                    }
                    Ok(())
                }
                FavoritesAction::Toggle { target, page } => {
                    let reference = target.reference()?;
                    let saved = match &reference {
                        ArticleRef::Id(id) => {
                            favorites.list().await.into_iter().find(|a| a.id() == id)
                        }
                        ArticleRef::Row(_) => None,
                    };
                    let article = match saved {
                        Some(article) => article,
                        None => {
                            let client = NewsClient::new(config)?;
                            let fetched = find_on_page(&client, &reference, page, page_size).await?;
                            favorites.saved_copy(fetched).await
                        }
                    };
                    if favorites.toggle(&article).await? {
                        println!("Added to favorites: {}", article.title());
                    } else {
                        println!("Removed from favorites: {}", article.title());
                    }
                    Ok(())
                }
            }
        }
        Command::Settings { action } => {
            let settings_store = SettingsStore::new(storage);
            match action {
                SettingsAction::Show => {
                    print_settings(&settings_store.load().await);
                    Ok(())
                }
                SettingsAction::Set {
                    name,
                    email,
                    notes,
                    notifications,
                    font_size,
                    theme,
                } => {
                    let mut settings = settings_store.load().await;
                    if let Some(name) = name {
                        settings.name = name;
                    }
                    if let Some(email) = email {
                        settings.email = email;
                    }
                    if let Some(notes) = notes {
                        settings.notes = notes;
                    }
                    if let Some(enabled) = notifications {
                        settings.notifications_enabled = enabled;
                    }
                    if let Some(size) = font_size {
                        settings.font_size = size;
                    }
                    if let Some(theme) = theme {
                        settings.theme = theme;
                    }
                    settings_store.save(&settings).await?;
                    println!("Settings saved.");
                    print_settings(&settings);
                    Ok(())
                }
            }
        }
    }
}

async fn show_headlines<A: ArticleSource>(
    client: &A,
    favorites: &FavoritesStore<FileStorage>,
    page_size: usize,
    pages: usize,
    search: Option<String>,
) -> Result<()> {
    let mut feed = PagedFeed::new(page_size);
    if let Some(query) = search {
        feed.set_search(query);
    }

    feed.refresh(client).await?;
    while feed.current_page() < pages && feed.has_more_pages() {
        feed.load_next_page(client).await?;
    }

    let flags = favorites.mark(feed.visible()).await;
    for (article, favorite) in feed.visible().iter().zip(flags) {
        let position = feed
            .articles()
            .iter()
            .position(|a| a.same_id(article))
            .map(|index| position_of(index, page_size));
        print_article(article, position, favorite);
    }

    println!(
        "-- {} of {} articles shown, {} page(s) loaded{}",
        feed.visible().len(),
        feed.articles().len(),
        feed.current_page(),
        if feed.has_more_pages() {
            ", more may be available"
        } else {
            ""
        }
    );
    Ok(())
}

fn print_article(article: &Article, position: Option<(usize, usize)>, favorite: bool) {
    let marker = if favorite { "★" } else { " " };
    match position {
        Some((page, row)) => println!(
            "{} {:>3}:{:<3} [{}] {}",
            marker,
            page,
            row,
            article.id(),
            article.title()
        ),
        None => println!("{} [{}] {}", marker, article.id(), article.title()),
    }
    match article.published_at() {
        Some(published_at) => println!("    {} · {}", article.source(), published_at),
        None => println!("    {}", article.source()),
    }
    if !article.description().is_empty() {
        println!("    {}", article.description());
    }
}

fn print_settings(settings: &news_reader::UserSettings) {
    println!("Name:          {}", settings.name);
    println!("Email:         {}", settings.email);
    println!("Notes:         {}", settings.notes);
    println!("Notifications: {}", if settings.notifications_enabled { "on" } else { "off" });
    println!("Font size:     {}pt", settings.font_size.round() as i32);
    println!("Theme:         {}", settings.theme);
}
