use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::models::Product;

mod selectors {
    use super::*;

    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

    pub static PRICE_PER_UNIT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".pricePerUnit").unwrap());

    pub static DATA_ITEM_HEADER: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".productDataItemHeader").unwrap());

    pub static PRODUCT_LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".productInfo h3 a").unwrap());
}

static NON_PRICE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^0-9.]+").unwrap());

/// Parses a decorated price such as `"£1.50/unit"`. Anything that is not a
/// digit or `.` is dropped before parsing.
pub fn parse_unit_price(raw: &str) -> Result<f32, ScrapeError> {
    let filtered = NON_PRICE_CHARS.replace_all(raw, "");
    let price = filtered.parse::<f32>().map_err(|source| ScrapeError::Price {
        raw: raw.to_string(),
        source: Some(source),
    })?;

    // Out of range for f32; would serialize as null.
    if !price.is_finite() {
        return Err(ScrapeError::Price {
            raw: raw.to_string(),
            source: None,
        });
    }
    Ok(price)
}

pub fn format_kb_size(len: usize) -> String {
    format!("{:.2}kb", len as f64 / 1024.0)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn parse_product(page: &[u8]) -> Result<Product, ScrapeError> {
    let size = format_kb_size(page.len());

    let html = String::from_utf8_lossy(page);
    let doc = Html::parse_document(&html);

    let title = doc
        .select(&selectors::TITLE)
        .next()
        .map(text_of)
        .unwrap_or_default();

    let price_text = doc
        .select(&selectors::PRICE_PER_UNIT)
        .next()
        .map(text_of)
        .unwrap_or_default();
    let unit_price = parse_unit_price(&price_text)?;

    // The description lives in whatever element follows the header label.
    let description = doc
        .select(&selectors::DATA_ITEM_HEADER)
        .next()
        .and_then(|header| header.next_siblings().find_map(ElementRef::wrap))
        .map(text_of)
        .unwrap_or_default();

    debug!(%title, unit_price, %size, "parsed product page");

    Ok(Product {
        title,
        size,
        unit_price,
        description,
    })
}

pub fn product_urls(doc: &Html) -> Vec<String> {
    doc.select(&selectors::PRODUCT_LINK)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}
