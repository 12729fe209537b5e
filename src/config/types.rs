use serde::Deserialize;
use std::time::Duration;

/// Endpoint of the Google Custom Search JSON API
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// File extensions that mark a scraped token as a filename rather than an address
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".svg"];

/// Main configuration structure for Email Harvester
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// API key for the search service
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Search-engine (context) identifier
    #[serde(rename = "engine-id")]
    pub engine_id: String,

    /// Free-text query whose results seed the crawl
    pub query: String,

    /// Number of result pages to cover across all workers
    #[serde(rename = "total-pages")]
    pub total_pages: u32,

    /// Search API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Suffix a URL's network location must end with to be crawled
    #[serde(rename = "target-tld")]
    pub target_tld: String,

    /// Comma-separated keyword list; empty accepts every address
    #[serde(default)]
    pub keywords: String,

    /// Number of parallel workers
    #[serde(rename = "worker-count", default = "default_worker_count")]
    pub worker_count: u32,

    /// Maximum number of link hops followed from each search result
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Pause after crawling each search result (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Suffixes that disqualify a scraped address
    #[serde(
        rename = "excluded-extensions",
        default = "default_excluded_extensions"
    )]
    pub excluded_extensions: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Append-only file receiving one accepted address per line
    #[serde(rename = "result-path", default = "default_result_path")]
    pub result_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_path: default_result_path(),
        }
    }
}

impl CrawlerConfig {
    /// Returns the configured keywords, split on commas and trimmed
    pub fn keyword_list(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Splits a comma-separated keyword string, dropping blank entries
///
/// # Examples
///
/// ```
/// use email_harvester::config::parse_keywords;
///
/// assert_eq!(parse_keywords(" sales, info ,,"), vec!["sales", "info"]);
/// assert!(parse_keywords("").is_empty());
/// ```
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_worker_count() -> u32 {
    4
}

fn default_max_depth() -> u32 {
    2
}

fn default_request_delay_ms() -> u64 {
    100
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_excluded_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_result_path() -> String {
    "result.csv".to_string()
}
