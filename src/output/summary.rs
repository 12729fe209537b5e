//! End-of-run summary
//!
//! Collects what each worker did and prints an overview once the pool has
//! finished.

use chrono::{DateTime, Utc};

/// What one worker accomplished
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerReport {
    /// 1-based worker identifier
    pub worker_id: usize,

    /// Number of search result pages requested
    pub pages_searched: u32,

    /// Number of search results crawled as seeds
    pub seeds_crawled: u32,

    /// Every URL this worker attempted to fetch, in completion order
    pub touched: Vec<String>,
}

impl WorkerReport {
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Self::default()
        }
    }
}

/// Summary statistics for a crawl run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Per-worker results, ordered by worker id
    pub workers: Vec<WorkerReport>,

    /// Addresses accepted during the run
    pub emails: Vec<String>,

    /// Distinct URLs claimed for fetching across all workers
    pub urls_visited: usize,
}

impl RunSummary {
    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Total number of fetch attempts across workers
    pub fn total_touched(&self) -> usize {
        self.workers.iter().map(|w| w.touched.len()).sum()
    }

    /// Total number of search result pages requested
    pub fn total_pages_searched(&self) -> u32 {
        self.workers.iter().map(|w| w.pages_searched).sum()
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &RunSummary) {
    println!("=== Harvest Summary ===\n");

    println!("Overview:");
    println!("  Started:  {}", summary.started_at.to_rfc3339());
    println!("  Finished: {}", summary.finished_at.to_rfc3339());
    println!("  Duration: {}s", summary.duration_seconds());
    println!("  Search pages requested: {}", summary.total_pages_searched());
    println!("  URLs visited: {}", summary.urls_visited);
    println!("  Emails found: {}", summary.emails.len());
    println!();

    for worker in &summary.workers {
        println!(
            "Worker {} ({} pages, {} seeds, {} URLs):",
            worker.worker_id,
            worker.pages_searched,
            worker.seeds_crawled,
            worker.touched.len()
        );
        for url in &worker.touched {
            println!("  {}", url);
        }
        println!();
    }

    if !summary.emails.is_empty() {
        println!("Emails ({}):", summary.emails.len());
        for email in &summary.emails {
            println!("  - {}", email);
        }
    }
}
