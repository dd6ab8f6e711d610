use anyhow::{Context, Result};
use tracing::debug;

use crate::api::MacroSource;
use crate::models::MacroPage;

/// Configuration for Stage 0 fetching
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL of the first page
    pub endpoint: String,
}

/// Result of Stage 0 fetching
#[derive(Debug)]
pub struct FetchResult {
    /// Decoded pages in fetch order
    pub pages: Vec<MacroPage>,
    /// Number of HTTP requests performed
    pub requests: usize,
}

impl FetchResult {
    pub fn total_macros(&self) -> usize {
        self.pages.iter().map(|p| p.macros.len()).sum()
    }
}

/// Execute Stage 0: Fetch
///
/// Walks the pagination chain starting at the configured endpoint, one
/// blocking request at a time, until `next_page` is null. Exactly one
/// request is made per upstream page; nothing is retried.
pub async fn execute_fetch<S: MacroSource>(source: &S, config: &FetchConfig) -> Result<FetchResult> {
    let mut pages = Vec::new();
    let mut requests = 0;
    let mut next = Some(config.endpoint.clone());

    while let Some(url) = next {
        let page = source
            .fetch_page(&url)
            .await
            .with_context(|| format!("Failed to fetch macros page from {}", url))?;
        requests += 1;
        debug!(
            "Fetched page {} ({} macros, next_page={})",
            requests,
            page.macros.len(),
            page.next_page.as_deref().unwrap_or("null")
        );
        next = page.next_page.clone();
        pages.push(page);
    }

    Ok(FetchResult { pages, requests })
}
