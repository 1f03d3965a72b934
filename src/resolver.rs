use crate::doh::DohClient;
use crate::providers::DnsProviderConfig;
use crate::{DnsError, DohResponse, Provider, Query, Resolution};
use std::time::Instant;

/// Which request of a resolution is in flight.
///
/// A resolution starts at `Primary`; any failure moves it to `Fallback`,
/// which has no successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Primary,
    Fallback,
}

impl Attempt {
    /// State to move to after this attempt fails
    pub fn next(self) -> Option<Attempt> {
        match self {
            Attempt::Primary => Some(Attempt::Fallback),
            Attempt::Fallback => None,
        }
    }

    /// Provider to ask during this attempt, given the one asked first
    pub fn provider(self, initial: Provider) -> Provider {
        match self {
            Attempt::Primary => initial,
            Attempt::Fallback => initial.other(),
        }
    }
}

/// Resolves queries against the DoH JSON APIs, falling back to the other
/// provider once when the first request fails.
///
/// # Example
///
/// ```rust,no_run
/// use dns_check::{DnsResolver, Provider, Query};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let resolver = DnsResolver::new();
///     let query = Query::new("example.com", "MX", Provider::Cloudflare);
///
///     let resolution = resolver.resolve(&query, false).await?;
///
///     println!("Answered by {}: {:?}", resolution.provider, resolution.response.answers()?);
///     Ok(())
/// }
/// ```
pub struct DnsResolver {
    doh: DohClient,
    google: DnsProviderConfig,
    cloudflare: DnsProviderConfig,
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver {
    /// Create a resolver using the public provider endpoints
    pub fn new() -> Self {
        Self::with_providers(
            DohClient::new(),
            DnsProviderConfig::from_provider(&Provider::Google),
            DnsProviderConfig::from_provider(&Provider::Cloudflare),
        )
    }

    /// Create a resolver with explicit client and endpoint settings
    pub fn with_providers(
        doh: DohClient,
        google: DnsProviderConfig,
        cloudflare: DnsProviderConfig,
    ) -> Self {
        Self {
            doh,
            google,
            cloudflare,
        }
    }

    pub fn provider_config(&self, provider: &Provider) -> &DnsProviderConfig {
        match provider {
            Provider::Google => &self.google,
            Provider::Cloudflare => &self.cloudflare,
        }
    }

    /// Resolve a query
    ///
    /// # Arguments
    ///
    /// * `query` - Domain, record type and the provider to ask first
    /// * `verbose` - Whether to print verbose output
    ///
    /// # Returns
    ///
    /// The decoded response together with the provider that produced it.
    /// If both providers fail, `DnsError::AllProvidersFailed` carries both
    /// errors.
    pub async fn resolve(&self, query: &Query, verbose: bool) -> Result<Resolution, DnsError> {
        let primary_error = match self.attempt(query, Attempt::Primary, verbose).await {
            Ok(resolution) => return Ok(resolution),
            Err(e) => e,
        };

        let fallback_provider = Attempt::Fallback.provider(query.provider);

        if verbose {
            eprintln!("  [verbose] Falling back to {}", fallback_provider);
        }

        self.attempt(query, Attempt::Fallback, verbose)
            .await
            .map_err(|fallback_error| DnsError::AllProvidersFailed {
                primary_provider: query.provider,
                primary: Box::new(primary_error),
                fallback_provider,
                fallback: Box::new(fallback_error),
            })
    }

    async fn attempt(
        &self,
        query: &Query,
        attempt: Attempt,
        verbose: bool,
    ) -> Result<Resolution, DnsError> {
        let provider = attempt.provider(query.provider);
        let config = self.provider_config(&provider);

        if verbose {
            eprintln!(
                "  [verbose] Querying {} for {} ({} record)",
                config.name, query.domain, query.record_type
            );
        }

        let start = Instant::now();

        let result = match config.build_url(&query.domain, &query.record_type) {
            Ok(url) => self.doh.fetch(&url, verbose).await,
            Err(e) => Err(e),
        };

        let duration = start.elapsed();

        match result {
            Ok(value) => {
                if verbose {
                    eprintln!(
                        "  [verbose] ✓ {} answered for {} in {:.2?}",
                        provider, query.domain, duration
                    );
                }
                Ok(Resolution {
                    query: query.clone(),
                    provider,
                    fell_back: attempt == Attempt::Fallback,
                    response: DohResponse::new(value),
                    duration,
                })
            }
            Err(e) => {
                if verbose {
                    eprintln!(
                        "  [verbose] ✗ {} failed for {} in {:.2?}: {}",
                        provider, query.domain, duration, e
                    );
                }
                Err(e)
            }
        }
    }
}
