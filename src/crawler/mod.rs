//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a fixed timeout
//! - HTML parsing and link extraction
//! - The recursive, depth-bounded crawl of one branch
//! - The worker pool that drives a whole run

mod coordinator;
mod engine;
mod fetcher;
mod parser;

pub use coordinator::{run_harvest, run_harvest_with_source, PoolSettings, WorkerPool};
pub use engine::{CrawlFuture, CrawlTask, Crawler};
pub use fetcher::{build_http_client, fetch_page, USER_AGENT};
pub use parser::extract_links;
