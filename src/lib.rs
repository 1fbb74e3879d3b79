pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::NewsConfig;

pub use crate::adapters::{FileStorage, MemoryStorage};
pub use crate::core::{
    favorites::FavoritesStore, feed::PagedFeed, fetcher::NewsClient, filter::filter_articles,
    lookup::{find_on_page, ArticleRef},
    settings::SettingsStore,
};
pub use crate::domain::model::{Article, ArticlesResponse, Theme, UserSettings};
pub use crate::domain::ports::{ArticleSource, DecodeFailurePolicy, SourceSettings, Storage};
pub use crate::utils::error::{NewsError, Result};
