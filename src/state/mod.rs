//! State module for tracking crawl progress
//!
//! This module provides the state shared by every worker of a harvest run.
//!
//! # Components
//!
//! - `CrawlState`: the visited-URL set and the accepted-email set, each
//!   behind its own lock

mod crawl_state;

pub use crawl_state::CrawlState;
