use crate::utils::error::{HarvestError, Result};
use reqwest::header::USER_AGENT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CLIENT_IDENT: &str = concat!("valghenter/", env!("CARGO_PKG_VERSION"));

/// Thin JSON client for the valgresultat API. Every request carries an
/// identifying User-Agent and a fixed 15 second timeout; there is no retry.
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| HarvestError::InvalidConfigValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Resolves `path` against the base URL. Leading slashes are stripped
    /// first, so hrefs like `/2021/st/11` stay under an `/api/` base prefix.
    fn resolve(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| HarvestError::Url {
                base: self.base.to_string(),
                path: path.to_string(),
                source: e,
            })
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(USER_AGENT, CLIENT_IDENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| HarvestError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Http {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|e| HarvestError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| HarvestError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
