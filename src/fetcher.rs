use reqwest::blocking::Client;
use reqwest::redirect;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub fn build_client(user_agent: &str, max_redirects: usize) -> Result<Client, ScrapeError> {
    let redirect_policy = redirect::Policy::custom(move |attempt| {
        if attempt.previous().len() > max_redirects {
            attempt.error(format!("Too many redirects (>{max_redirects})"))
        } else {
            attempt.follow()
        }
    });

    Ok(Client::builder()
        .redirect(redirect_policy)
        .user_agent(user_agent)
        .build()?)
}

pub fn fetch_page(client: &Client, url: &Url) -> Result<Vec<u8>, ScrapeError> {
    let resp = client.get(url.clone()).send()?.error_for_status()?;
    let body = resp.bytes()?;
    debug!(%url, bytes = body.len(), "fetched page");
    Ok(body.to_vec())
}

pub fn resolve_link(base: &Url, href: &str) -> Result<Url, ScrapeError> {
    base.join(href).map_err(|source| ScrapeError::Url {
        href: href.to_string(),
        source,
    })
}
