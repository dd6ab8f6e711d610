use std::future::Future;

use reqwest::Client;

use crate::api::ZendeskError;
use crate::models::MacroPage;

/// First page of the macros resource when no endpoint override is given
pub const DEFAULT_ENDPOINT: &str = "https://muunwallet.zendesk.com/api/v2/macros.json";

/// Configuration for the Zendesk API client
#[derive(Debug, Clone)]
pub struct ZendeskConfig {
    /// Account email used for authentication
    pub user: String,
    /// API token paired with the account
    pub token: String,
    /// URL of the first macros page
    pub endpoint: String,
}

impl ZendeskConfig {
    /// Create config against the default endpoint
    pub fn new(user: String, token: String) -> Self {
        Self {
            user,
            token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different endpoint (e.g. a mock server)
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Anything the fetch loop can pull macro pages from
pub trait MacroSource {
    /// Fetch and decode one page of macros from the given URL
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<MacroPage, ZendeskError>>;
}

/// Zendesk API client
pub struct ZendeskClient {
    client: Client,
    config: ZendeskConfig,
}

impl ZendeskClient {
    pub fn new(config: ZendeskConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// URL of the first page, from the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl MacroSource for ZendeskClient {
    async fn fetch_page(&self, url: &str) -> Result<MacroPage, ZendeskError> {
        // Zendesk token auth: username suffixed with /token, password = token
        let response = self
            .client
            .get(url)
            .basic_auth(format!("{}/token", self.config.user), Some(&self.config.token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ZendeskError::Http { status, body });
        }

        let body = response.text().await?;

        // Decode in two steps so malformed JSON and schema mismatches
        // surface as distinct errors
        let value: serde_json::Value = serde_json::from_str(&body)?;
        serde_json::from_value(value).map_err(|e| ZendeskError::Schema(e.to_string()))
    }
}
