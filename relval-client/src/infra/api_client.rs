use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;

use crate::access::{IdentityError, UserInfo, UserInfoEnvelope};
use crate::config::ClientConfig;
use crate::infra::services::IdentityService;

/// HTTP client for the RelVal web API
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    identity_path: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("identity_path", &self.identity_path)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(config.server_url());
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            identity_path: config.identity_path().to_string(),
        })
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the identity endpoint and unwrap its `response` envelope.
    pub async fn get_user_info(&self) -> Result<UserInfo, IdentityError> {
        let url = self.build_url(&self.identity_path);
        debug!("[ApiClient] GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("[ApiClient] {} returned {}", url, status);
            return Err(IdentityError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        parse_user_info(&bytes)
    }
}

#[async_trait]
impl IdentityService for ApiClient {
    async fn fetch_user_info(&self) -> Result<UserInfo, IdentityError> {
        self.get_user_info().await
    }
}

/// Decode an identity endpoint body.
pub fn parse_user_info(body: &[u8]) -> Result<UserInfo, IdentityError> {
    let envelope: UserInfoEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.response)
}

// Many users will provide "localhost:8000" which reqwest rejects, so add a
// scheme when missing and drop trailing slashes.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}
