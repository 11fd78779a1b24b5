use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid unit price {raw:?}")]
    Price {
        raw: String,
        #[source]
        source: Option<ParseFloatError>,
    },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid product link {href:?}: {source}")]
    Url {
        href: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
