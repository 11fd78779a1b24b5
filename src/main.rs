mod archiver;
mod error;
mod fetcher;
mod models;
mod parser;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scraper::Html;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::models::Results;

const DEFAULT_INDEX_URL: &str =
    "http://hiring-tests.s3-website-eu-west-1.amazonaws.com/2015_Developer_Scrape/5_products.html";

/// Scrape a product listing and print a JSON price report.
#[derive(Parser, Debug)]
#[command(name = "product_scraper", version)]
struct Args {
    /// Index page listing the products
    #[arg(env = "SCRAPER_URL", default_value = DEFAULT_INDEX_URL)]
    url: Url,

    /// Write the report to this file instead of stdout
    #[arg(short, long, env = "SCRAPER_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// User-Agent header sent with every request
    #[arg(long, env = "SCRAPER_USER_AGENT", default_value = fetcher::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Maximum redirects followed per request
    #[arg(long, default_value_t = 10)]
    max_redirects: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let client = fetcher::build_client(&args.user_agent, args.max_redirects)?;

    let index_page = fetcher::fetch_page(&client, &args.url)
        .with_context(|| format!("failed to fetch index page {}", args.url))?;
    let index_html = String::from_utf8_lossy(&index_page);
    let hrefs = parser::product_urls(&Html::parse_document(&index_html));

    if hrefs.is_empty() {
        warn!(url = %args.url, "no product links found on index page");
    } else {
        info!(url = %args.url, count = hrefs.len(), "found product links");
    }

    let mut results = Results::default();
    for href in &hrefs {
        let url = fetcher::resolve_link(&args.url, href)?;
        let page = fetcher::fetch_page(&client, &url)
            .with_context(|| format!("failed to fetch product page {url}"))?;
        let product = parser::parse_product(&page)
            .with_context(|| format!("failed to parse product page {url}"))?;

        info!(%url, title = %product.title.trim(), unit_price = product.unit_price, "scraped product");
        results.add_product(product);
    }

    archiver::write_report(&results, args.output.as_deref(), !args.compact)?;
    info!(products = results.products.len(), total = results.total, "report written");
    Ok(())
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}
