//! HTTP client for the four board feeds.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::feeds::{NewsFeed, ScheduleFeed, StatusFeed, WeatherFeed};

/// Thin GET+JSON client for the backend serving the board endpoints.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("{} returned status: {}", path, response.status());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    pub async fn fetch_status(&self) -> Result<StatusFeed> {
        self.get_json("/api/status").await
    }

    pub async fn fetch_weather(&self) -> Result<WeatherFeed> {
        self.get_json("/api/weather").await
    }

    pub async fn fetch_news(&self) -> Result<NewsFeed> {
        self.get_json("/api/news").await
    }

    pub async fn fetch_schedule(&self) -> Result<ScheduleFeed> {
        self.get_json("/api/schedule").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = FeedClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }
}
