use crate::email::EmailFilter;
use crate::output::{ReportEvent, ReportSink, ResultFile};
use crate::HarvestError;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared deduplication state for one harvest run
///
/// Holds the set of URLs claimed for fetching and the set of accepted email
/// addresses. Each set has its own lock so URL bookkeeping never waits on
/// email bookkeeping. Locks are held only for the check-and-mutate step and
/// never across network I/O.
#[derive(Debug)]
pub struct CrawlState {
    visited: Mutex<HashSet<String>>,
    emails: Mutex<EmailLedger>,
    filter: EmailFilter,
}

#[derive(Debug, Default)]
struct EmailLedger {
    seen: HashSet<String>,
    accepted: Vec<String>,
    result_file: Option<ResultFile>,
}

impl CrawlState {
    /// Creates an empty state that keeps accepted addresses in memory only
    pub fn new(filter: EmailFilter) -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            emails: Mutex::new(EmailLedger::default()),
            filter,
        }
    }

    /// Creates an empty state that also appends accepted addresses to a file
    pub fn with_result_file(filter: EmailFilter, result_file: ResultFile) -> Self {
        let state = Self::new(filter);
        lock(&state.emails).result_file = Some(result_file);
        state
    }

    /// Claims a URL for fetching
    ///
    /// Returns true iff this call inserted the URL, meaning the caller owns
    /// it and should fetch it. Every later call for the same URL, from any
    /// worker, returns false.
    pub fn try_visit(&self, url: &str) -> bool {
        lock(&self.visited).insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        lock(&self.visited).contains(url)
    }

    pub fn visited_count(&self) -> usize {
        lock(&self.visited).len()
    }

    /// Records a candidate address found by `worker_id`
    ///
    /// The address is accepted when it has not been seen before, passes the
    /// validity check, and matches the keyword filter. An accepted address
    /// is appended to the result file and reported as `EmailFound` while the
    /// email lock is held, so each qualifying address is persisted exactly
    /// once and in acceptance order.
    ///
    /// Returns `Ok(true)` if the address was accepted. If persisting fails
    /// the address is not recorded and the error is returned.
    pub fn record_email(
        &self,
        email: &str,
        worker_id: usize,
        report: &dyn ReportSink,
    ) -> Result<bool, HarvestError> {
        let mut ledger = lock(&self.emails);

        if ledger.seen.contains(email) || !self.filter.accepts(email) {
            return Ok(false);
        }

        if let Some(file) = ledger.result_file.as_mut() {
            file.append(email)?;
        }

        ledger.seen.insert(email.to_string());
        ledger.accepted.push(email.to_string());

        report.report(ReportEvent::EmailFound {
            worker_id,
            email: email.to_string(),
        });

        Ok(true)
    }

    /// Returns accepted addresses in acceptance order
    pub fn emails(&self) -> Vec<String> {
        lock(&self.emails).accepted.clone()
    }

    pub fn email_count(&self) -> usize {
        lock(&self.emails).accepted.len()
    }
}

// A panicking worker cannot leave either set half-updated, so a poisoned
// lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
