//! # dns-check
//!
//! Resolve DNS records through the JSON APIs of public DNS-over-HTTPS
//! providers, falling back to the other provider when the first one fails.
//!
//! ## Features
//!
//! - Built-in providers: Google, Cloudflare
//! - Single automatic fallback to the other provider on any failure
//! - Raw JSON or human-readable answer output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dns_check::{format, DnsResolver, Provider, Query};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = DnsResolver::new();
//!     let query = Query::new("example.com", "a", Provider::Google);
//!
//!     let resolution = resolver.resolve(&query, false).await?;
//!
//!     for line in format::render(&resolution, false)? {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "cli")]
pub mod config;
mod doh;
pub mod format;
mod providers;
mod resolver;
mod response;

// Re-export main types
pub use doh::{DohClient, DEFAULT_TIMEOUT};
pub use providers::DnsProviderConfig;
pub use resolver::{Attempt, DnsResolver};
pub use response::{Answer, DohResponse};

use std::fmt;
use std::time::Duration;

/// DoH provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Cloudflare,
}

impl Provider {
    /// Returns a list of all available providers
    pub fn all() -> Vec<Provider> {
        vec![Provider::Google, Provider::Cloudflare]
    }

    /// Parse a provider name, ignoring case.
    ///
    /// Only `google` selects Google; every other value selects Cloudflare.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("google") {
            Provider::Google
        } else {
            Provider::Cloudflare
        }
    }

    /// The provider to fall back to when this one fails
    pub fn other(&self) -> Self {
        match self {
            Provider::Google => Provider::Cloudflare,
            Provider::Cloudflare => Provider::Google,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Google => write!(f, "Google"),
            Provider::Cloudflare => write!(f, "Cloudflare"),
        }
    }
}

/// A single lookup: what to resolve and where to ask first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Domain to resolve, already reduced to a bare host
    pub domain: String,
    /// Record type, upper-cased (`A`, `AAAA`, `MX`, ...)
    pub record_type: String,
    /// Provider asked first
    pub provider: Provider,
}

impl Query {
    pub fn new(domain: &str, record_type: &str, provider: Provider) -> Self {
        Self {
            domain: extract_host(domain),
            record_type: record_type.to_ascii_uppercase(),
            provider,
        }
    }
}

/// Reduce a URL-looking input (`https://example.com/path`) to its host.
///
/// Inputs without `://`, and URLs without a usable host, come back unchanged.
pub fn extract_host(input: &str) -> String {
    if !input.contains("://") {
        return input.to_string();
    }

    let url = match reqwest::Url::parse(input) {
        Ok(url) => url,
        Err(_) => return input.to_string(),
    };

    match url.host_str() {
        // IPv6 hosts are serialized in brackets
        Some(host) if !host.is_empty() => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string(),
        _ => input.to_string(),
    }
}

/// Result of a DNS resolution with timing and provider information
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The query that was resolved
    pub query: Query,
    /// The provider that responded
    pub provider: Provider,
    /// Whether the answer came from the fallback provider
    pub fell_back: bool,
    /// The decoded response body
    pub response: DohResponse,
    /// Time taken by the successful request
    pub duration: Duration,
}

/// Error types for DNS resolution
#[derive(Debug, thiserror::Error)]
pub enum DnsError {
    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("All providers failed: {primary_provider}: {primary}; {fallback_provider}: {fallback}")]
    AllProvidersFailed {
        primary_provider: Provider,
        primary: Box<DnsError>,
        fallback_provider: Provider,
        fallback: Box<DnsError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_name() {
        assert_eq!(Provider::from_name("google"), Provider::Google);
        assert_eq!(Provider::from_name("GOOGLE"), Provider::Google);
        assert_eq!(Provider::from_name("cloudflare"), Provider::Cloudflare);
        assert_eq!(Provider::from_name("quad9"), Provider::Cloudflare);
        assert_eq!(Provider::from_name(""), Provider::Cloudflare);
    }

    #[test]
    fn test_provider_other() {
        assert_eq!(Provider::Google.other(), Provider::Cloudflare);
        assert_eq!(Provider::Cloudflare.other(), Provider::Google);
        for provider in Provider::all() {
            assert_eq!(provider.other().other(), provider);
        }
    }

    #[test]
    fn test_query_normalizes_record_type() {
        let query = Query::new("example.com", "aaaa", Provider::Google);
        assert_eq!(query.record_type, "AAAA");
        assert_eq!(query.domain, "example.com");
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(extract_host("https://example.com/path"), "example.com");
        assert_eq!(extract_host("http://Example.COM:8080/x?y=1"), "example.com");
        assert_eq!(extract_host("https://[2001:db8::1]/"), "2001:db8::1");
        assert_eq!(extract_host("example.com"), "example.com");
    }

    #[test]
    fn test_extract_host_falls_back_to_input() {
        assert_eq!(extract_host("file:///etc/hosts"), "file:///etc/hosts");
        assert_eq!(extract_host("not a url://"), "not a url://");
    }
}
