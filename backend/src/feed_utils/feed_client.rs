use std::future::Future;

use anyhow::Context;
use common::geometry::FeedFeatureCollection;

use crate::config::FeedConfig;

/// Loads and parses a GeoJSON resource.
pub trait FeedLoader: Send + Sync + 'static {
    fn load(&self, url: &str) -> impl Future<Output = anyhow::Result<FeedFeatureCollection>> + Send;
}

pub struct HttpFeedLoader {
    client: reqwest::Client,
    app_token: Option<String>,
}

impl HttpFeedLoader {
    pub fn new(config: &FeedConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build feed http client")?;
        Ok(Self::with_client(client, config))
    }

    /// Uses a prepared client; only the token is taken from `config`.
    pub fn with_client(client: reqwest::Client, config: &FeedConfig) -> Self {
        Self { client, app_token: config.app_token.clone() }
    }
}

impl FeedLoader for HttpFeedLoader {
    async fn load(&self, url: &str) -> anyhow::Result<FeedFeatureCollection> {
        let t0 = std::time::Instant::now();
        let mut request = self.client.get(url);
        if let Some(app_token) = &self.app_token {
            request = request.header("X-App-Token", app_token);
        }

        let response = request.send().await.with_context(|| format!("Feed request failed: {url}"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis() as u32;
        tracing::info!("FEED RESPONSE: len = {} (fetched in {}ms)", response_txt.len(), dt_ms);

        let collection: FeedFeatureCollection =
            serde_json::from_str(&response_txt).context("Feed response is not a GeoJSON feature collection")?;
        Ok(collection)
    }
}
