//! Report sink trait and event types
//!
//! Workers describe what they are doing through [`ReportEvent`]s pushed into
//! a [`ReportSink`]. The sink decides where the lines end up: the log, a
//! channel feeding a display, or an in-memory buffer.

use crate::FetchError;
use std::fmt;

/// A progress or result event, tagged with the worker that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// A worker is requesting a page of search results
    SearchingPage { worker_id: usize, page: u32 },

    /// A worker is starting a crawl from a search result
    FetchingUrl { worker_id: usize, url: String },

    /// A new address was accepted and persisted
    EmailFound { worker_id: usize, email: String },

    /// A page fetch failed (non-200 status or transport error)
    FetchFailed { worker_id: usize, error: FetchError },

    /// The search source returned no more results for this worker
    NoMoreResults { worker_id: usize },

    /// A worker has exhausted its pages
    WorkerFinished { worker_id: usize },

    /// Every URL a worker attempted to fetch, in completion order
    TouchedUrls { worker_id: usize, urls: Vec<String> },

    /// All workers of the pool have finished
    AllWorkersDone,
}

impl ReportEvent {
    /// The worker that produced this event, if any
    pub fn worker_id(&self) -> Option<usize> {
        match self {
            Self::SearchingPage { worker_id, .. }
            | Self::FetchingUrl { worker_id, .. }
            | Self::EmailFound { worker_id, .. }
            | Self::FetchFailed { worker_id, .. }
            | Self::NoMoreResults { worker_id }
            | Self::WorkerFinished { worker_id }
            | Self::TouchedUrls { worker_id, .. } => Some(*worker_id),
            Self::AllWorkersDone => None,
        }
    }
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchingPage { worker_id, page } => {
                write!(f, "Worker {}: Searching page {}...", worker_id, page)
            }
            Self::FetchingUrl { worker_id, url } => {
                write!(f, "Worker {}: Fetching URL: {}", worker_id, url)
            }
            Self::EmailFound { worker_id, email } => {
                write!(f, "Worker {}: Found email: {}", worker_id, email)
            }
            Self::FetchFailed { worker_id, error } => write!(f, "Worker {}: {}", worker_id, error),
            Self::NoMoreResults { worker_id } => {
                write!(f, "Worker {}: No more results found.", worker_id)
            }
            Self::WorkerFinished { worker_id } => {
                write!(f, "Worker {}: Email scraping completed.", worker_id)
            }
            Self::TouchedUrls { worker_id, urls } => {
                write!(f, "Worker {}: Visited {} URLs", worker_id, urls.len())?;
                for url in urls {
                    write!(f, "\n{}", url)?;
                }
                Ok(())
            }
            Self::AllWorkersDone => write!(f, "All workers have completed."),
        }
    }
}

/// Trait for report sinks
///
/// Sinks are shared by every worker, so implementations must be thread-safe
/// and must not block for long.
pub trait ReportSink: Send + Sync {
    /// Delivers one event
    fn report(&self, event: ReportEvent);
}
