//! `pagedate`: extract a best-guess publication or last-modified date from
//! an HTML file or URL.

use std::fs;
use std::io::{self, Read};

use clap::Parser;
use pagedate::{find_date, Config};

/// Extract a best-guess publication or last-modified date from an HTML document.
#[derive(Debug, Parser)]
#[command(name = "pagedate", version, about)]
struct Cli {
    /// Path to an HTML file, or `-` to read from stdin. Mutually exclusive with `--url`.
    input: Option<String>,

    /// Fetch the HTML from this URL instead of reading a file.
    #[arg(long, env = "PAGEDATE_URL")]
    url: Option<String>,

    /// Search the whole document (beyond headers and structured body markup) when
    /// the fast tiers find nothing.
    #[arg(long)]
    extensive_search: bool,

    /// Prefer the earliest plausible date (publication) over the latest (last modified).
    #[arg(long)]
    original_date: bool,

    /// `strftime`-style output format.
    #[arg(long, default_value = "%Y-%m-%d")]
    output_format: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (html, resolved_url) = if let Some(url) = &cli.url {
        (pagedate::net::fetch_url(url)?, Some(url.clone()))
    } else {
        let html = match cli.input.as_deref() {
            Some("-") | None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
            Some(path) => fs::read_to_string(path)?,
        };
        (html, None)
    };

    let config = Config {
        extensive_search: cli.extensive_search,
        original_date: cli.original_date,
        output_format: cli.output_format,
        url: resolved_url,
        ..Config::default()
    };
    config.validate()?;

    match find_date(&html, &config) {
        Some(date) => {
            println!("{date}");
            Ok(())
        }
        None => {
            tracing::warn!("no date found");
            std::process::exit(1);
        }
    }
}
