//! Search result sources
//!
//! A search source turns a query and a page number into the list of result
//! URLs that seed the crawl.

mod google;

pub use google::GoogleSearch;

use async_trait::async_trait;

/// A paginated source of seed URLs
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Fetches one page of results
    ///
    /// Returns `None` when there are no more results or the request failed;
    /// callers treat both the same way and stop paginating.
    async fn query(&self, terms: &str, page: u32) -> Option<Vec<String>>;
}

/// Returns the result pages owned by one worker
///
/// Worker `worker_id` (1-based) owns pages `worker_id`, `worker_id + stride`,
/// `worker_id + 2 * stride`, ... up to and including `total_pages`.
///
/// # Examples
///
/// ```
/// use email_harvester::search::owned_pages;
///
/// assert_eq!(owned_pages(2, 4, 10), vec![2, 6, 10]);
/// ```
pub fn owned_pages(worker_id: usize, stride: usize, total_pages: u32) -> Vec<u32> {
    let Ok(start) = u32::try_from(worker_id) else {
        return Vec::new();
    };
    (start..=total_pages).step_by(stride.max(1)).collect()
}
