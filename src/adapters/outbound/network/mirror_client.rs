use crate::adapters::outbound::decoding::decode_index;
use crate::ports::outbound::{IndexLocation, IndexSource};
use crate::shared::error::CritError;
use crate::shared::security::MAX_INDEX_FILE_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_MAX_RETRIES: u32 = 3;

/// MirrorIndexClient adapter downloading package indexes over HTTP(S)
///
/// # Async Support
/// Uses the async reqwest client. Failed attempts are retried with a linear
/// backoff; the body is decoded only once a download succeeds.
pub struct MirrorIndexClient {
    client: reqwest::Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl MirrorIndexClient {
    /// Creates a client with the default timeout and retry count
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_MAX_RETRIES)
    }

    pub fn with_config(timeout: Duration, max_retries: u32) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: max_retries.max(1),
            retry_delay: Duration::from_millis(500),
        })
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        let bytes = self
            .fetch_with_retry(url)
            .await
            .map_err(|e| CritError::IndexFetchError {
                url: url.to_string(),
                details: e.to_string(),
            })?;
        decode_index(bytes, url)
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<Vec<u8>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    tracing::warn!(url, attempt, error = %e, "index download failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay * attempt).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no download attempt was made")))
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Mirror returned status code {}", response.status());
        }
        if let Some(length) = response.content_length() {
            if length > MAX_INDEX_FILE_SIZE {
                anyhow::bail!(
                    "Security: index is too large ({} bytes). Maximum allowed size is {} bytes.",
                    length,
                    MAX_INDEX_FILE_SIZE
                );
            }
        }

        let body = response.bytes().await?;
        if body.len() as u64 > MAX_INDEX_FILE_SIZE {
            anyhow::bail!(
                "Security: index is too large ({} bytes). Maximum allowed size is {} bytes.",
                body.len(),
                MAX_INDEX_FILE_SIZE
            );
        }

        tracing::debug!(url, bytes = body.len(), "index downloaded");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl IndexSource for MirrorIndexClient {
    async fn read_index(&self, location: &IndexLocation) -> Result<String> {
        match location {
            IndexLocation::Url(url) => self.fetch(url).await,
            IndexLocation::Path(path) => Err(CritError::IndexFetchError {
                url: path.display().to_string(),
                details: "this client only accepts http(s) URLs".to_string(),
            }
            .into()),
        }
    }
}
