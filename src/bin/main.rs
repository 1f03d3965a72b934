use anyhow::Context;
use colored::*;
use dns_check::config::Config;
use dns_check::{format, DnsResolver};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let query = config.query();

    if config.verbose {
        eprintln!("{}", "  [verbose] Verbose mode enabled".dimmed());
        eprintln!(
            "{}",
            format!("  [verbose] Domain: {}", query.domain).dimmed()
        );
        eprintln!(
            "{}",
            format!("  [verbose] Record type: {}", query.record_type).dimmed()
        );
        eprintln!(
            "{}",
            format!("  [verbose] Provider: {}", query.provider).dimmed()
        );
    }

    let resolver = DnsResolver::new();

    let resolution = resolver
        .resolve(&query, config.verbose)
        .await
        .with_context(|| format!("failed to resolve {} ({})", query.domain, query.record_type))?;

    if config.verbose {
        let via = if resolution.fell_back { " (fallback)" } else { "" };
        eprintln!(
            "{}",
            format!(
                "  [verbose] Answered by {}{} in {:.2?}",
                resolution.provider, via, resolution.duration
            )
            .dimmed()
        );
    }

    for line in format::render(&resolution, config.raw)? {
        println!("{}", line);
    }

    Ok(())
}
