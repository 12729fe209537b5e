use async_trait::async_trait;
use email_harvester::config::{
    Config, CrawlerConfig, OutputConfig, SearchConfig, DEFAULT_EXCLUDED_EXTENSIONS,
};
use email_harvester::email::EmailFilter;
use email_harvester::search::SearchSource;
use std::collections::HashMap;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Network location of a mock server, e.g. "127.0.0.1:41234"
pub fn netloc(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

pub fn filter(keywords: &[&str]) -> EmailFilter {
    EmailFilter::new(
        default_extensions(),
        keywords.iter().map(|k| k.to_string()).collect(),
    )
}

/// Mounts an HTML page at `route` that must be requested exactly `times` times
pub async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><body>{}</body></html>", body))
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Creates a configuration pointing at the given search endpoint
pub fn test_config(endpoint: &str, target_tld: &str, result_path: &str) -> Config {
    Config {
        search: SearchConfig {
            api_key: "test-key".to_string(),
            engine_id: "test-cx".to_string(),
            query: "contact us".to_string(),
            total_pages: 2,
            endpoint: endpoint.to_string(),
        },
        crawler: CrawlerConfig {
            target_tld: target_tld.to_string(),
            keywords: String::new(),
            worker_count: 2,
            max_depth: 2,
            request_delay_ms: 0,
            fetch_timeout_secs: 5,
            excluded_extensions: default_extensions(),
        },
        output: OutputConfig {
            result_path: result_path.to_string(),
        },
    }
}

/// Search source serving fixed pages and recording every request
#[derive(Default)]
pub struct FakeSearch {
    pages: HashMap<u32, Vec<String>>,
    requests: Mutex<Vec<u32>>,
}

impl FakeSearch {
    pub fn new(pages: HashMap<u32, Vec<String>>) -> Self {
        Self {
            pages,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        let mut pages = self.requests.lock().unwrap().clone();
        pages.sort_unstable();
        pages
    }
}

#[async_trait]
impl SearchSource for FakeSearch {
    async fn query(&self, _terms: &str, page: u32) -> Option<Vec<String>> {
        self.requests.lock().unwrap().push(page);
        self.pages.get(&page).cloned()
    }
}
