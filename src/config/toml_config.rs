use crate::core::feed::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::ports::{DecodeFailurePolicy, SourceSettings};
use crate::utils::error::{NewsError, Result};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

const DECODE_ERROR_MODES: [&str; 2] = ["surface", "sample"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub source: SourceConfig,
    pub feed: FeedConfig,
    pub fetch: FetchConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub country: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            country: "us".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// "surface" 回傳解碼錯誤，"sample" 改用範例資料
    pub on_decode_error: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            on_decode_error: "surface".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./news-data".to_string(),
        }
    }
}

impl NewsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NewsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NEWS_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NewsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_positive_number("source.timeout_seconds", self.source.timeout_seconds as usize, 1)?;
        validate_range("feed.page_size", self.feed.page_size, 1, MAX_PAGE_SIZE)?;
        validate_path("storage.data_dir", &self.storage.data_dir)?;

        if !DECODE_ERROR_MODES.contains(&self.fetch.on_decode_error.as_str()) {
            return Err(NewsError::InvalidConfigValueError {
                field: "fetch.on_decode_error".to_string(),
                value: self.fetch.on_decode_error.clone(),
                reason: format!("Valid values: {}", DECODE_ERROR_MODES.join(", ")),
            });
        }

        Ok(())
    }

    pub fn page_size(&self) -> usize {
        self.feed.page_size
    }

    /// Command line override for `feed.page_size`, checked like the file value.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        validate_range("--page-size", page_size, 1, MAX_PAGE_SIZE)?;
        self.feed.page_size = page_size;
        Ok(())
    }

    pub fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }
}

impl SourceSettings for NewsConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    /// Empty keys, the placeholder key and unresolved `${VAR}` references all
    /// count as "not configured".
    fn api_key(&self) -> Option<&str> {
        self.source
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER && !key.contains("${"))
    }

    fn country(&self) -> &str {
        &self.source.country
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn decode_failure_policy(&self) -> DecodeFailurePolicy {
        match self.fetch.on_decode_error.as_str() {
            "sample" => DecodeFailurePolicy::SampleFallback,
            _ => DecodeFailurePolicy::Surface,
        }
    }
}

impl Validate for NewsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
