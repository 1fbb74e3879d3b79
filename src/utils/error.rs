use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Invalid response from server (status {status})")]
    InvalidResponse { status: u16 },

    #[error("No data received")]
    NoData,

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Article '{id}' not found on page {page}")]
    ArticleNotFound { id: String, page: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NewsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NewsError::InvalidRequest { .. }
            | NewsError::InvalidResponse { .. }
            | NewsError::NoData
            | NewsError::Http(_) => ErrorCategory::Network,
            NewsError::Decode(_) | NewsError::Serialization(_) | NewsError::ArticleNotFound { .. } => {
                ErrorCategory::Data
            }
            NewsError::Io(_) => ErrorCategory::Storage,
            NewsError::ConfigValidationError { .. }
            | NewsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 網路類錯誤可以重試，設定錯誤必須由使用者修正
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NewsError::InvalidRequest { .. } => {
                "Check the endpoint URL; pages start at 1 and page sizes must be between 1 and 100"
            }
            NewsError::InvalidResponse { .. } => {
                "The news service rejected the request; verify the API key and try again later"
            }
            NewsError::NoData => "The news service returned an empty body; try again later",
            NewsError::Decode(_) => {
                "The response did not look like an articles list; check the endpoint or set on_decode_error = \"sample\""
            }
            NewsError::Http(_) => "Check your network connection and try again",
            NewsError::ArticleNotFound { .. } => {
                "Run `headlines` to see article positions, then pass `--page` and `--row` (ids of live articles change on every fetch)"
            }
            NewsError::Io(_) => "Check that the data directory exists and is writable",
            NewsError::Serialization(_) => "The stored data could not be encoded; please report this",
            NewsError::ConfigValidationError { .. }
            | NewsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            NewsError::InvalidRequest { .. } => "Invalid request".to_string(),
            NewsError::InvalidResponse { .. } => "Invalid response from server".to_string(),
            NewsError::NoData => "No data received".to_string(),
            NewsError::Decode(_) => "Failed to decode response".to_string(),
            NewsError::Http(e) if e.is_timeout() => "The request timed out".to_string(),
            NewsError::Http(_) => "Could not reach the news service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
