//! Email Harvester: a concurrent, domain-bounded email crawler
//!
//! This crate seeds a crawl from search-engine results, follows links
//! depth-first within a target domain suffix, and collects the email
//! addresses found along the way. Several workers share one deduplicating
//! crawl state so no page is fetched twice and no address is reported twice.

pub mod config;
pub mod crawler;
pub mod email;
pub mod output;
pub mod search;
pub mod state;
pub mod url;

use thiserror::Error;

/// Errors that abort a harvest run before any worker starts
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by a single page fetch
///
/// These never abort a worker; the branch that hit them is abandoned and
/// the error is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: Status code {status}")]
    Status { url: String, status: u16 },

    #[error("Error fetching {url}: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } => url,
        }
    }
}

/// Result type alias for Email Harvester operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_harvest, Crawler, WorkerPool};
pub use email::{extract_emails, is_valid_email, EmailFilter};
pub use state::CrawlState;
