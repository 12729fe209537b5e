//! Crawler coordinator - worker pool orchestration
//!
//! This module contains the worker pool that drives a harvest run:
//! - Splitting search result pages across workers
//! - Crawling each search result as a seed
//! - Throttling between seeds
//! - Joining workers and producing the run summary

use crate::config::Config;
use crate::crawler::engine::{CrawlTask, Crawler};
use crate::crawler::fetcher::build_http_client;
use crate::email::EmailFilter;
use crate::output::{ReportEvent, ReportSink, ResultFile, RunSummary, WorkerReport};
use crate::search::{owned_pages, GoogleSearch, SearchSource};
use crate::state::CrawlState;
use crate::HarvestError;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Run-wide settings for the worker pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    /// Free-text search query
    pub query: String,

    /// Number of workers; also the stride between a worker's pages
    pub worker_count: usize,

    /// Highest search result page to request
    pub total_pages: u32,

    /// Depth budget given to each search result
    pub max_depth: u32,

    /// Pause after each search result
    pub request_delay: Duration,
}

impl PoolSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            query: config.search.query.clone(),
            worker_count: config.crawler.worker_count as usize,
            total_pages: config.search.total_pages,
            max_depth: config.crawler.max_depth,
            request_delay: config.crawler.request_delay(),
        }
    }
}

/// Runs a fixed number of independent workers over one shared crawl state
///
/// Worker `i` (1-based) requests search pages `i, i + n, i + 2n, ...` and
/// crawls every result on them. Workers do not coordinate beyond the shared
/// [`CrawlState`]; the pool only waits for all of them to finish.
pub struct WorkerPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    crawler: Crawler,
    search: Arc<dyn SearchSource>,
    report: Arc<dyn ReportSink>,
    settings: PoolSettings,
}

impl WorkerPool {
    pub fn new(
        crawler: Crawler,
        search: Arc<dyn SearchSource>,
        report: Arc<dyn ReportSink>,
        settings: PoolSettings,
    ) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                crawler,
                search,
                report,
                settings,
            }),
        }
    }

    pub fn state(&self) -> &Arc<CrawlState> {
        self.inner.crawler.state()
    }

    /// Spawns every worker and waits for all of them
    ///
    /// Returns one report per worker, ordered by worker id. A worker that
    /// panics is logged and contributes an empty report; the others are
    /// unaffected.
    pub async fn run(&self) -> Vec<WorkerReport> {
        let handles: Vec<_> = (1..=self.inner.settings.worker_count)
            .map(|worker_id| {
                let inner = Arc::clone(&self.inner);
                (worker_id, tokio::spawn(run_worker(inner, worker_id)))
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (worker_id, handle) in handles {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::error!("Worker {} terminated abnormally: {}", worker_id, e);
                    reports.push(WorkerReport::new(worker_id));
                }
            }
        }

        self.inner.report.report(ReportEvent::AllWorkersDone);
        reports
    }
}

/// One worker's page-and-crawl loop
async fn run_worker(inner: Arc<PoolInner>, worker_id: usize) -> WorkerReport {
    let settings = &inner.settings;
    let mut report = WorkerReport::new(worker_id);

    for page in owned_pages(worker_id, settings.worker_count, settings.total_pages) {
        inner
            .report
            .report(ReportEvent::SearchingPage { worker_id, page });
        report.pages_searched += 1;

        let Some(urls) = inner.search.query(&settings.query, page).await else {
            inner.report.report(ReportEvent::NoMoreResults { worker_id });
            break;
        };

        for url in urls {
            inner.report.report(ReportEvent::FetchingUrl {
                worker_id,
                url: url.clone(),
            });

            let task = CrawlTask::new(url, settings.max_depth, worker_id);
            if let Err(error) = inner.crawler.crawl(task, &mut report.touched).await {
                inner
                    .report
                    .report(ReportEvent::FetchFailed { worker_id, error });
            }
            report.seeds_crawled += 1;

            tokio::time::sleep(settings.request_delay).await;
        }
    }

    inner
        .report
        .report(ReportEvent::WorkerFinished { worker_id });
    inner.report.report(ReportEvent::TouchedUrls {
        worker_id,
        urls: report.touched.clone(),
    });

    report
}

/// Runs a complete harvest from configuration
///
/// This is the main entry point for starting a run. It will:
/// 1. Build the shared HTTP client
/// 2. Open the result file in append mode
/// 3. Create the shared crawl state
/// 4. Run the worker pool against the configured search source
/// 5. Collect the run summary
///
/// # Arguments
///
/// * `config` - The validated configuration
/// * `report` - Receives every progress and result event
///
/// # Returns
///
/// * `Ok(RunSummary)` - All workers finished
/// * `Err(HarvestError)` - Setup failed before any worker started
pub async fn run_harvest(
    config: &Config,
    report: Arc<dyn ReportSink>,
) -> Result<RunSummary, HarvestError> {
    let client = build_http_client(config.crawler.fetch_timeout())?;
    let search: Arc<dyn SearchSource> = Arc::new(GoogleSearch::new(client.clone(), &config.search));
    run_harvest_with_source(config, search, client, report).await
}

/// Runs a complete harvest against a caller-supplied search source
pub async fn run_harvest_with_source(
    config: &Config,
    search: Arc<dyn SearchSource>,
    client: reqwest::Client,
    report: Arc<dyn ReportSink>,
) -> Result<RunSummary, HarvestError> {
    let started_at = Utc::now();

    let result_file = ResultFile::open(Path::new(&config.output.result_path))?;
    tracing::info!("Appending accepted addresses to {}", result_file.path().display());

    let filter = EmailFilter::new(
        config.crawler.excluded_extensions.clone(),
        config.crawler.keyword_list(),
    );
    let state = Arc::new(CrawlState::with_result_file(filter, result_file));

    let crawler = Crawler::new(
        client,
        Arc::clone(&state),
        Arc::clone(&report),
        config.crawler.target_tld.clone(),
    );
    let pool = WorkerPool::new(crawler, search, report, PoolSettings::from_config(config));

    tracing::info!(
        "Starting {} workers over {} search pages (target {}, max depth {})",
        config.crawler.worker_count,
        config.search.total_pages,
        config.crawler.target_tld,
        config.crawler.max_depth
    );

    let workers = pool.run().await;

    let summary = RunSummary {
        started_at,
        finished_at: Utc::now(),
        workers,
        emails: state.emails(),
        urls_visited: state.visited_count(),
    };

    tracing::info!(
        "Harvest completed: {} emails from {} URLs in {}s",
        summary.emails.len(),
        summary.urls_visited,
        summary.duration_seconds()
    );

    Ok(summary)
}
