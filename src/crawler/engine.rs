//! Depth-bounded, deduplicated crawl of a single branch
//!
//! A branch starts at one URL and follows links depth-first. All workers
//! share one [`CrawlState`], so a page claimed by any worker is never
//! fetched again by another.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_links;
use crate::email::extract_emails;
use crate::output::{ReportEvent, ReportSink};
use crate::state::CrawlState;
use crate::url::{is_fetchable_scheme, matches_target_suffix};
use crate::FetchError;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by [`Crawler::crawl`]
pub type CrawlFuture<'a> = Pin<Box<dyn Future<Output = Result<(), FetchError>> + Send + 'a>>;

/// A unit of work: one URL, the hops left below it, and the owning worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    pub depth_budget: u32,
    pub worker_id: usize,
}

impl CrawlTask {
    pub fn new(url: impl Into<String>, depth_budget: u32, worker_id: usize) -> Self {
        Self {
            url: url.into(),
            depth_budget,
            worker_id,
        }
    }

    /// The task for a link found on this task's page
    fn child(&self, url: String) -> Option<Self> {
        let depth_budget = self.depth_budget.checked_sub(1)?;
        Some(Self {
            url,
            depth_budget,
            worker_id: self.worker_id,
        })
    }
}

/// Fetches pages, records the addresses on them, and follows their links
pub struct Crawler {
    client: Client,
    state: Arc<CrawlState>,
    report: Arc<dyn ReportSink>,
    target_tld: String,
}

impl Crawler {
    pub fn new(
        client: Client,
        state: Arc<CrawlState>,
        report: Arc<dyn ReportSink>,
        target_tld: impl Into<String>,
    ) -> Self {
        Self {
            client,
            state,
            report,
            target_tld: target_tld.into(),
        }
    }

    pub fn state(&self) -> &Arc<CrawlState> {
        &self.state
    }

    /// Crawls one URL and, budget permitting, everything it links to
    ///
    /// # Crawl Steps
    ///
    /// 1. Claim the URL in the shared visited set; stop if already claimed
    /// 2. Stop silently unless the URL is http(s)
    /// 3. Stop silently unless its network location ends with the target suffix
    /// 4. Fetch it; a failed fetch ends this branch and is returned
    /// 5. Record every address found in the body
    /// 6. If the depth budget is not exhausted, crawl each link with one
    ///    hop less, reporting (not propagating) failures of child branches
    /// 7. Append the URL to `touched`, whether or not the fetch succeeded
    ///
    /// A zero budget still fetches the page itself; its links are not followed.
    pub fn crawl<'a>(&'a self, task: CrawlTask, touched: &'a mut Vec<String>) -> CrawlFuture<'a> {
        Box::pin(async move {
            if !self.state.try_visit(&task.url) {
                return Ok(());
            }

            if !is_fetchable_scheme(&task.url) {
                return Ok(());
            }

            if !matches_target_suffix(&task.url, &self.target_tld) {
                tracing::trace!("Skipping {}: outside {}", task.url, self.target_tld);
                return Ok(());
            }

            let result = self.fetch_and_follow(&task, touched).await;
            touched.push(task.url);
            result
        })
    }

    async fn fetch_and_follow(
        &self,
        task: &CrawlTask,
        touched: &mut Vec<String>,
    ) -> Result<(), FetchError> {
        tracing::debug!(
            "Worker {}: fetching {} (depth budget {})",
            task.worker_id,
            task.url,
            task.depth_budget
        );

        let body = fetch_page(&self.client, &task.url).await?;
        self.record_emails(&body, task.worker_id);

        if task.depth_budget == 0 {
            return Ok(());
        }

        for link in extract_links(&body, &task.url) {
            let Some(child) = task.child(link) else {
                break;
            };
            if let Err(error) = self.crawl(child, touched).await {
                self.report.report(ReportEvent::FetchFailed {
                    worker_id: task.worker_id,
                    error,
                });
            }
        }

        Ok(())
    }

    fn record_emails(&self, body: &str, worker_id: usize) {
        for email in extract_emails(body) {
            if let Err(e) = self
                .state
                .record_email(&email, worker_id, &*self.report)
            {
                tracing::error!("Worker {}: failed to persist {}: {}", worker_id, email, e);
            }
        }
    }
}
