use crate::common::{filter, mount_page, netloc, test_config, FakeSearch};
use email_harvester::crawler::{
    build_http_client, run_harvest, run_harvest_with_source, Crawler, PoolSettings, WorkerPool,
};
use email_harvester::output::{MemoryReporter, ReportEvent, ReportSink};
use email_harvester::search::SearchSource;
use email_harvester::state::CrawlState;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(worker_count: usize, total_pages: u32) -> PoolSettings {
    PoolSettings {
        query: "contact".to_string(),
        worker_count,
        total_pages,
        max_depth: 2,
        request_delay: Duration::ZERO,
    }
}

fn create_pool(
    target_tld: &str,
    search: Arc<FakeSearch>,
    pool_settings: PoolSettings,
) -> (WorkerPool, Arc<MemoryReporter>) {
    let client = build_http_client(Duration::from_secs(5)).unwrap();
    let state = Arc::new(CrawlState::new(filter(&[])));
    let reporter = Arc::new(MemoryReporter::new());
    let sink: Arc<dyn ReportSink> = reporter.clone();
    let crawler = Crawler::new(client, state, Arc::clone(&sink), target_tld);
    let search: Arc<dyn SearchSource> = search;
    (WorkerPool::new(crawler, search, sink, pool_settings), reporter)
}

#[tokio::test]
async fn test_workers_request_disjoint_pages() {
    let search = Arc::new(FakeSearch::new(
        (1..=7).map(|page| (page, Vec::new())).collect(),
    ));
    let (pool, reporter) = create_pool(".org", Arc::clone(&search), settings(3, 7));

    let reports = pool.run().await;

    assert_eq!(search.requested_pages(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        reports.iter().map(|r| r.pages_searched).collect::<Vec<_>>(),
        vec![3, 2, 2]
    );
    assert_eq!(reporter.events().last(), Some(&ReportEvent::AllWorkersDone));
}

#[tokio::test]
async fn test_exhausted_search_stops_only_that_worker() {
    // Page 1 is missing, so worker 1 stops before page 3
    let pages = HashMap::from([(2, vec![]), (3, vec![]), (4, vec![])]);
    let search = Arc::new(FakeSearch::new(pages));
    let (pool, reporter) = create_pool(".org", Arc::clone(&search), settings(2, 4));

    let reports = pool.run().await;

    assert_eq!(search.requested_pages(), vec![1, 2, 4]);
    assert_eq!(reports[0].pages_searched, 1);
    assert_eq!(reports[1].pages_searched, 2);

    let events = reporter.events();
    assert!(events.contains(&ReportEvent::NoMoreResults { worker_id: 1 }));
    assert!(!events.contains(&ReportEvent::NoMoreResults { worker_id: 2 }));
    assert!(events.contains(&ReportEvent::WorkerFinished { worker_id: 1 }));
    assert!(events.contains(&ReportEvent::WorkerFinished { worker_id: 2 }));
}

#[tokio::test]
async fn test_shared_page_fetched_once_across_workers() {
    let server = MockServer::start().await;
    mount_page(&server, "/a", r#"a@firm.org <a href="/shared">s</a>"#, 1).await;
    mount_page(&server, "/b", r#"b@firm.org <a href="/shared">s</a>"#, 1).await;
    mount_page(&server, "/shared", "team@firm.org a@firm.org b@firm.org", 1).await;

    let uri = server.uri();
    let pages = HashMap::from([
        (1, vec![format!("{}/a", uri)]),
        (2, vec![format!("{}/b", uri), format!("{}/a", uri)]),
    ]);
    let search = Arc::new(FakeSearch::new(pages));
    let (pool, reporter) = create_pool(&netloc(&server), search, settings(2, 2));

    let reports = pool.run().await;
    let state = pool.state();

    assert_eq!(state.visited_count(), 3);
    let emails: HashSet<String> = state.emails().into_iter().collect();
    assert_eq!(emails.len(), 3);
    assert_eq!(state.email_count(), 3);

    let touched: Vec<&String> = reports.iter().flat_map(|r| r.touched.iter()).collect();
    let unique: HashSet<&&String> = touched.iter().collect();
    assert_eq!(touched.len(), 3);
    assert_eq!(unique.len(), 3);
    assert_eq!(reports.iter().map(|r| r.seeds_crawled).sum::<u32>(), 3);

    let listings: Vec<_> = reporter
        .events()
        .into_iter()
        .filter(|e| matches!(e, ReportEvent::TouchedUrls { .. }))
        .collect();
    assert_eq!(listings.len(), 2);
}

#[tokio::test]
async fn test_seed_failure_reported_and_worker_continues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_page(&server, "/up", "ok@firm.org", 1).await;

    let uri = server.uri();
    let pages = HashMap::from([(1, vec![format!("{}/down", uri), format!("{}/up", uri)])]);
    let search = Arc::new(FakeSearch::new(pages));
    let (pool, reporter) = create_pool(&netloc(&server), search, settings(1, 1));

    let reports = pool.run().await;

    assert_eq!(reports[0].touched.len(), 2);
    assert_eq!(pool.state().emails(), vec!["ok@firm.org"]);
    assert!(reporter
        .lines()
        .contains(&format!("Worker 1: Failed to fetch {}/down: Status code 503", uri)));
}

#[tokio::test]
async fn test_run_harvest_with_source_writes_unique_lines() {
    let server = MockServer::start().await;
    mount_page(&server, "/one", r#"dup@firm.org <a href="/two">2</a>"#, 1).await;
    mount_page(&server, "/two", "dup@firm.org other@firm.org", 1).await;
    mount_page(&server, "/three", "dup@firm.org third@firm.org", 1).await;

    let uri = server.uri();
    let pages = HashMap::from([
        (1, vec![format!("{}/one", uri)]),
        (2, vec![format!("{}/three", uri), format!("{}/two", uri)]),
    ]);
    let dir = TempDir::new().unwrap();
    let result_path = dir.path().join("result.csv");
    let config = test_config(
        "http://search.invalid/",
        &netloc(&server),
        result_path.to_str().unwrap(),
    );

    let reporter = Arc::new(MemoryReporter::new());
    let summary = run_harvest_with_source(
        &config,
        Arc::new(FakeSearch::new(pages)),
        build_http_client(Duration::from_secs(5)).unwrap(),
        reporter.clone(),
    )
    .await
    .expect("Harvest failed");

    let content = std::fs::read_to_string(&result_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(unique.len(), 3);
    assert_eq!(summary.emails, lines);
    assert_eq!(summary.urls_visited, 3);
    assert_eq!(summary.workers.len(), 2);
    assert_eq!(summary.total_touched(), 3);
}

#[tokio::test]
async fn test_run_harvest_end_to_end_with_search_api() {
    let search_server = MockServer::start().await;
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("q", "contact us"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ { "link": format!("{}/", site.uri()) } ]
        })))
        .mount(&search_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("start", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&search_server)
        .await;

    mount_page(&site, "/", r#"hello@site.org <a href="/about">about</a>"#, 1).await;
    mount_page(&site, "/about", "jobs@site.org logo@site.svg", 1).await;

    let dir = TempDir::new().unwrap();
    let result_path = dir.path().join("out.csv");
    let config = test_config(
        &format!("{}/customsearch/v1", search_server.uri()),
        &netloc(&site),
        result_path.to_str().unwrap(),
    );

    let reporter = Arc::new(MemoryReporter::new());
    let summary = run_harvest(&config, reporter.clone())
        .await
        .expect("Harvest failed");

    assert_eq!(summary.emails, vec!["hello@site.org", "jobs@site.org"]);
    assert_eq!(
        std::fs::read_to_string(&result_path).unwrap(),
        "hello@site.org\njobs@site.org\n"
    );
    assert!(reporter
        .events()
        .contains(&ReportEvent::NoMoreResults { worker_id: 2 }));
    assert_eq!(reporter.events().last(), Some(&ReportEvent::AllWorkersDone));
}

#[tokio::test]
async fn test_run_harvest_fails_when_result_file_cannot_open() {
    let dir = TempDir::new().unwrap();
    let result_path = dir.path().join("missing").join("out.csv");
    let config = test_config(
        "http://search.invalid/",
        ".org",
        result_path.to_str().unwrap(),
    );

    let result = run_harvest(&config, Arc::new(MemoryReporter::new())).await;
    assert!(matches!(result, Err(email_harvester::HarvestError::Io(_))));
}
