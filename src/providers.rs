use crate::{DnsError, Provider};
use reqwest::Url;

#[derive(Debug, Clone)]
pub struct DnsProviderConfig {
    pub name: &'static str,
    // JSON API endpoint, queried with `name` and `type` parameters
    pub doh_json_url: String,
}

impl DnsProviderConfig {
    pub fn from_provider(provider: &Provider) -> Self {
        match provider {
            Provider::Google => DnsProviderConfig {
                name: "Google",
                doh_json_url: "https://dns.google/resolve".to_string(),
            },
            Provider::Cloudflare => DnsProviderConfig {
                name: "Cloudflare",
                doh_json_url: "https://cloudflare-dns.com/dns-query".to_string(),
            },
        }
    }

    /// Same provider, different endpoint. Used to point a provider at a
    /// local server.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.doh_json_url = url.into();
        self
    }

    /// Build the query URL for `domain` and `record_type`.
    ///
    /// The domain is percent-encoded but otherwise passed through untouched;
    /// the provider reports malformed names itself.
    pub fn build_url(&self, domain: &str, record_type: &str) -> Result<Url, DnsError> {
        let mut url = Url::parse(&self.doh_json_url)
            .map_err(|e| DnsError::InvalidUrl(format!("{}: {}", self.doh_json_url, e)))?;

        url.query_pairs_mut()
            .append_pair("name", domain)
            .append_pair("type", record_type);

        Ok(url)
    }
}
