//! Configuration module for Email Harvester
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use email_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling {} with {} workers", config.crawler.target_tld, config.crawler.worker_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    parse_keywords, Config, CrawlerConfig, OutputConfig, SearchConfig, DEFAULT_EXCLUDED_EXTENSIONS,
    DEFAULT_SEARCH_ENDPOINT,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
