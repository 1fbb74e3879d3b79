pub mod favorites;
pub mod feed;
pub mod fetcher;
pub mod filter;
pub mod lookup;
pub mod sample;
pub mod settings;

pub use crate::domain::model::{Article, ArticlesResponse, Theme, UserSettings};
pub use crate::domain::ports::{ArticleSource, DecodeFailurePolicy, SourceSettings, Storage};
pub use crate::utils::error::Result;
