//! Output module for progress reporting and crawl results
//!
//! This module handles:
//! - Report events and the sinks that receive them
//! - The append-only result file of accepted addresses
//! - The end-of-run summary

mod reporters;
mod result_file;
pub mod summary;
mod traits;

pub use reporters::{ChannelReporter, MemoryReporter, TracingReporter};
pub use result_file::ResultFile;
pub use summary::{print_summary, RunSummary, WorkerReport};
pub use traits::{ReportEvent, ReportSink};
