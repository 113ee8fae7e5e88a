//! Command-line client for the redirect service.
//!
//! Stores redirects in either wire encoding and resolves codes without
//! following the redirect, which makes it handy for checking a deployment.
//!
//! # Usage
//!
//! ```bash
//! # Store a redirect as MessagePack
//! cargo run --bin client -- store abc https://example.com --format msgpack
//!
//! # Store a redirect as JSON against another server
//! cargo run --bin client -- --server http://shortener:8000 store abc https://example.com
//!
//! # Resolve a code
//! cargo run --bin client -- resolve abc
//! ```
//!
//! # Environment Variables
//!
//! - `REDIRECT_SERVER` (optional): base URL of the service (default: `http://localhost:8000`)

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use redirect_service::prelude::*;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, LOCATION};

/// CLI client for the redirect service.
#[derive(Parser)]
#[command(name = "client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the redirect service
    #[arg(
        long,
        env = "REDIRECT_SERVER",
        default_value = "http://localhost:8000",
        global = true
    )]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a redirect
    Store {
        /// Short code
        code: String,

        /// Destination URL
        url: String,

        /// Wire encoding for the request
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Resolve a code without following the redirect
    Resolve {
        /// Short code
        code: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Msgpack,
}

impl Format {
    fn content_type(self) -> &'static str {
        match self {
            Format::Json => JSON_CONTENT_TYPE,
            Format::Msgpack => MSGPACK_CONTENT_TYPE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("Failed to build HTTP client")?;
    let server = cli.server.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Store { code, url, format } => store(&http, &server, code, url, format).await,
        Commands::Resolve { code } => resolve(&http, &server, &code).await,
    }
}

async fn store(
    http: &reqwest::Client,
    server: &str,
    code: String,
    url: String,
    format: Format,
) -> Result<()> {
    let content_type = format.content_type();
    let serializer = serializer_for(Some(content_type));
    let body = serializer.encode(&Redirect::new(code, url, Utc::now()))?;

    let response = http
        .post(format!("{server}/"))
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .with_context(|| format!("Failed to reach {server}"))?;

    let status = response.status();
    let response_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await.context("Failed to read response")?;

    if status != StatusCode::CREATED {
        println!(
            "{} {}",
            format!("✗ {status}").red().bold(),
            String::from_utf8_lossy(&bytes)
        );
        anyhow::bail!("store failed with {status}");
    }

    let stored = serializer_for(response_type.as_deref()).decode(&bytes)?;

    println!("{}", "✓ Redirect stored".green().bold());
    println!("  {} {}", "Code:".bright_black(), stored.code.cyan());
    println!("  {} {}", "URL:".bright_black(), stored.url);
    println!(
        "  {} {}",
        "Created:".bright_black(),
        stored.created_at.to_rfc3339()
    );
    println!(
        "  {} {}",
        "Encoding:".bright_black(),
        response_type.as_deref().unwrap_or("unknown")
    );

    Ok(())
}

async fn resolve(http: &reqwest::Client, server: &str, code: &str) -> Result<()> {
    let response = http
        .get(format!("{server}/{code}"))
        .send()
        .await
        .with_context(|| format!("Failed to reach {server}"))?;

    let status = response.status();
    match status {
        StatusCode::MOVED_PERMANENTLY => {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            println!("{} {}", code.cyan(), format!("→ {location}").green());
            Ok(())
        }
        StatusCode::NOT_FOUND => {
            println!("{}", format!("✗ No redirect for '{code}'").yellow());
            anyhow::bail!("not found")
        }
        other => {
            println!("{}", format!("✗ {other}").red().bold());
            anyhow::bail!("resolve failed with {other}")
        }
    }
}
