use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ScrapeError;
use crate::models::Results;

pub fn render(results: &Results, pretty: bool) -> Result<String, ScrapeError> {
    let json = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    Ok(json)
}

/// Writes the report to `path`, or to stdout when no path is given.
pub fn write_report(
    results: &Results,
    path: Option<&Path>,
    pretty: bool,
) -> Result<(), ScrapeError> {
    let json = render(results, pretty)?;
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json.as_bytes())?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
