//! Google Sheets export fetching
//!
//! Users paste the share link of their routine sheet. This module rewrites
//! that link into the document's CSV export URL and fetches the exported
//! text. Fetch failures are kept distinct from "parsed but empty": the
//! former is a connectivity problem, the latter a sheet content problem.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, info};

use crate::constants::SHEET_ID_PATTERN;
use crate::{Error, Result};

fn sheet_id_regex() -> &'static Regex {
    static SHEET_ID_RE: OnceLock<Regex> = OnceLock::new();
    SHEET_ID_RE.get_or_init(|| Regex::new(SHEET_ID_PATTERN).expect("valid sheet id pattern"))
}

/// Rewrite a Google Sheets share link into its CSV export URL
///
/// Extracts the document id from the `/d/<id>` path segment. Returns `None`
/// for URLs without such a segment.
pub fn to_csv_export_url(url: &str) -> Option<String> {
    sheet_id_regex().captures(url).map(|captures| {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            &captures[1]
        )
    })
}

/// Fetcher for routine sheet CSV exports
#[derive(Debug, Clone)]
pub struct SheetFetcher {
    client: reqwest::Client,
}

impl SheetFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the CSV export text for a sheet share link
    ///
    /// The link must contain a recognizable document id; a non-success HTTP
    /// status is reported as a fetch error.
    pub async fn fetch_csv(&self, url: &str) -> Result<String> {
        let export_url = to_csv_export_url(url).ok_or_else(|| Error::invalid_sheet_url(url))?;
        debug!("Fetching sheet export: {}", export_url);

        let response = self
            .client
            .get(&export_url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, "request failed", Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(
                url,
                format!("server returned status {}", status),
                None,
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::fetch(url, "failed to read response body", Some(e)))?;

        info!("Fetched {} bytes of sheet text", text.len());
        Ok(text)
    }
}
