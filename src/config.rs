//! Command-line configuration.

use crate::{Provider, Query};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dns_check")]
#[command(about = "Resolve a DNS record over DNS-over-HTTPS, falling back to a second provider")]
#[command(version)]
struct Args {
    /// Domain to resolve; URLs are reduced to their host
    domain: String,

    /// DNS record type to query (case-insensitive)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "A")]
    record_type: String,

    /// Provider to ask first: google or cloudflare (any other value means cloudflare)
    #[arg(short, long, value_name = "NAME", default_value = "google")]
    provider: String,

    /// Print the raw JSON response instead of answer lines
    #[arg(short, long)]
    json: bool,

    /// Show request and fallback details on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Validated, immutable run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub record_type: String,
    pub provider: Provider,
    pub raw: bool,
    pub verbose: bool,
    pub domain: String,
}

impl Config {
    fn from_args(args: Args) -> Self {
        Config {
            record_type: args.record_type.to_ascii_uppercase(),
            provider: Provider::from_name(&args.provider),
            raw: args.json,
            verbose: args.verbose,
            domain: args.domain,
        }
    }

    /// Parse the process arguments, exiting with usage on error
    pub fn parse() -> Self {
        Self::from_args(Args::parse())
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(args).map(Self::from_args)
    }

    pub fn query(&self) -> Query {
        Query::new(&self.domain, &self.record_type, self.provider)
    }
}
