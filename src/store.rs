use std::time::Duration;

use log::{error, info};
use reqwest::Client;
use thiserror::Error;

use crate::record::{FindRecord, SharedFindRow};
use crate::sample;

const DEFAULT_BASE_URL: &str = "https://YOUR_PROJECT_ID.supabase.co";
const DEFAULT_ANON_KEY: &str = "YOUR_ANON_KEY";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("insert returned no rows")]
    EmptyInsertReply,
}

/// Connection settings for the hosted `shared_finds` table. Constructed
/// explicitly and handed to [`FindStore::new`]; there is no process-wide
/// client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Settings from `SUPABASE_URL` / `SUPABASE_ANON_KEY`, falling back to
    /// the placeholder project for unconfigured environments.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SUPABASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key =
            std::env::var("SUPABASE_ANON_KEY").unwrap_or_else(|_| DEFAULT_ANON_KEY.to_string());
        Self::new(base_url, api_key)
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }
}

pub struct FindStore {
    client: Client,
    pub(crate) config: StoreConfig,
}

impl FindStore {
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("fossilmapped/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/shared_finds",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Fetch every shared find, newest first.
    ///
    /// Any failure at all (network, HTTP status, schema mismatch) logs the
    /// error and substitutes the built-in sample set. One shot, no retry,
    /// no partial results.
    pub async fn fetch_shared_finds(&self) -> Vec<FindRecord> {
        match self.try_fetch().await {
            Ok(rows) => {
                info!("Fetched {} shared finds", rows.len());
                rows.into_iter().map(FindRecord::from).collect()
            }
            Err(e) => {
                error!(
                    "Failed to fetch shared finds: {}; using built-in sample set",
                    e
                );
                sample::sample_finds()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<SharedFindRow>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "shared_at.desc")])
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Insert one find into the shared table and return the stored copy.
    pub async fn share_find(&self, record: &FindRecord) -> Result<FindRecord, StoreError> {
        let row = SharedFindRow::from(record);
        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?
            .error_for_status()?;

        let mut stored: Vec<SharedFindRow> = response.json().await?;
        if stored.is_empty() {
            return Err(StoreError::EmptyInsertReply);
        }
        info!("Shared find {}", stored[0].fossilmap_id);
        Ok(FindRecord::from(stored.remove(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_creation() {
        let store = FindStore::new(StoreConfig::new("https://example.supabase.co", "anon"));
        assert_eq!(store.config.timeout, Duration::from_secs(10));
        assert_eq!(
            store.table_url(),
            "https://example.supabase.co/rest/v1/shared_finds"
        );
    }

    #[tokio::test]
    async fn test_store_configuration() {
        let config = StoreConfig::new("https://example.supabase.co/", "anon").with_timeout(2000);
        let store = FindStore::new(config);

        assert_eq!(store.config.timeout, Duration::from_millis(2000));
        // trailing slash must not double up in the table URL
        assert_eq!(
            store.table_url(),
            "https://example.supabase.co/rest/v1/shared_finds"
        );
    }
}
