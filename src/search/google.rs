use crate::config::SearchConfig;
use crate::search::SearchSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Client for the Google Custom Search JSON API
#[derive(Debug, Clone)]
pub struct GoogleSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

impl GoogleSearch {
    pub fn new(client: Client, config: &SearchConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            engine_id: config.engine_id.clone(),
        }
    }

    async fn fetch_page(&self, terms: &str, page: u32) -> Result<SearchResponse, reqwest::Error> {
        let start = page.to_string();
        self.client
            .get(&self.endpoint)
            .query(&[
                ("q", terms),
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("start", start.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await
    }
}

#[async_trait]
impl SearchSource for GoogleSearch {
    async fn query(&self, terms: &str, page: u32) -> Option<Vec<String>> {
        match self.fetch_page(terms, page).await {
            Ok(response) => {
                let items = response.items?;
                Some(items.into_iter().filter_map(|item| item.link).collect())
            }
            Err(e) => {
                tracing::warn!("Search request for page {} failed: {}", page, e);
                None
            }
        }
    }
}
