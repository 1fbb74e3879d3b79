use crate::core::lookup::ArticleRef;
use crate::domain::model::Theme;
use crate::utils::error::{NewsError, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "news-reader")]
#[command(about = "Browse headlines and keep a list of favorite articles")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the directory holding favorites and settings
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Override the API key from the configuration
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch and print headlines
    Headlines {
        /// Articles per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Only show articles whose title, description or source contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage favorite articles
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Show or change reader settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesAction {
    /// List saved favorites
    List,

    /// Add an article, looked up on the given page
    Add {
        #[command(flatten)]
        target: ArticleTarget,

        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Remove a favorite by id
    Remove { id: String },

    /// Add the article if it is not a favorite yet, remove it otherwise
    Toggle {
        #[command(flatten)]
        target: ArticleTarget,

        #[arg(long, default_value = "1")]
        page: usize,
    },
}

/// An article on a page, by id or by the row `headlines` prints for it.
#[derive(Debug, Clone, Args)]
#[group(id = "article", required = true, multiple = false)]
pub struct ArticleTarget {
    /// Article id (live ids change on every fetch, prefer --row)
    pub id: Option<String>,

    /// Row on the page, as printed by `headlines`
    #[arg(long)]
    pub row: Option<usize>,
}

impl ArticleTarget {
    pub fn reference(&self) -> Result<ArticleRef> {
        match (&self.id, self.row) {
            (_, Some(row)) => Ok(ArticleRef::Row(row)),
            (Some(id), None) => Ok(ArticleRef::Id(id.clone())),
            (None, None) => Err(NewsError::InvalidRequest {
                message: "pass an article id or --row".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsAction {
    /// Print the stored settings
    Show,

    /// Change one or more settings
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        notifications: Option<bool>,

        /// Font size between 12 and 24
        #[arg(long)]
        font_size: Option<f32>,

        /// light, dark or auto
        #[arg(long)]
        theme: Option<Theme>,
    },
}
