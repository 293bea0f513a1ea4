//! MoonBoard RS command line
//!
//! Compiles search criteria into the catalog's request parameters and prints
//! them. Optionally decodes a previously saved search response.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mb_core::config::AppConfig;
use mb_models::{problems_as_json, MbResponse};

mod args;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_filter());

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    let query = cli.to_request(&config).to_query()?;
    info!(sort = query.sort(), filter = query.filter(), "Compiled query");

    let url = config.problems_url();
    if cli.json {
        let out = serde_json::json!({
            "url": url,
            "query": query,
            "body": query.form_body(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("POST {}", url);
        println!("{}", query.form_body());
    }

    if let Some(path) = &cli.response {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading response file {}", path.display()))?;
        let response = MbResponse::from_body(&body)?;

        println!("\nNumber of problems: {}\n", response.total);
        println!("{}", problems_as_json(&response.data)?);
    }

    Ok(())
}

/// Initialize tracing/logging on stderr so stdout stays machine readable
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
