use crate::DnsError;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Media type of the DoH JSON API
pub const DOH_JSON: &str = "application/dns-json";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues single GET requests against a DoH JSON endpoint
#[derive(Debug, Clone)]
pub struct DohClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for DohClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DohClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies are all
    /// reported as errors.
    pub async fn fetch(&self, url: &Url, verbose: bool) -> Result<Value, DnsError> {
        if verbose {
            eprintln!("  [verbose] [DoH] → GET {}", url);
        }

        let start = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, DOH_JSON)
            .send()
            .await?;

        let status = response.status();

        if verbose {
            eprintln!(
                "  [verbose] [DoH] ← {} in {:.2?}",
                status,
                start.elapsed()
            );
        }

        if !status.is_success() {
            return Err(DnsError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;

        if verbose {
            eprintln!("  [verbose] [DoH]   Body: {} bytes", body.len());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
