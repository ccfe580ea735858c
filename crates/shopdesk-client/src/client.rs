//! HTTP client for the storefront admin API.
//!
//! Wraps `reqwest` with base-URL handling and typed envelope decoding. A
//! non-2xx status is surfaced as [`ClientError::Http`]; a 2xx body with
//! `"success": false` is returned as data for the caller to interpret.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shopdesk_core::{AppConfig, ValidDraft, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

use crate::error::ClientError;
use crate::form::product_form;
use crate::types::{CategoryResponse, CreateProductResponse};

pub const CATEGORY_PATH: &str = "/api/v1/category/get-category";
pub const CREATE_PRODUCT_PATH: &str = "/api/v1/product/create-product";

/// Client for the category and product-creation endpoints.
///
/// Use [`CatalogClient::from_config`] in the binary or
/// [`CatalogClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ClientError::InvalidBaseUrl`] if the configured base URL
    /// does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL and default timeouts.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::from_config`].
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::build(
            base_url,
            timeout_secs,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            DEFAULT_USER_AGENT,
        )
    }

    fn build(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining a relative endpoint path
        // appends to any path prefix instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the selectable categories.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not the expected envelope.
    pub async fn get_categories(&self) -> Result<CategoryResponse, ClientError> {
        let url = self.endpoint(CATEGORY_PATH)?;
        tracing::debug!(url = %url, "fetching categories");
        let response = self.client.get(url.clone()).send().await?;
        Self::decode(response, &url).await
    }

    /// Submits a validated draft as a multipart `create-product` request.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure, timeout, non-2xx status,
    ///   or an unusable photo content type.
    /// - [`ClientError::Deserialize`] if the body is not the expected envelope.
    pub async fn create_product(
        &self,
        draft: &ValidDraft,
    ) -> Result<CreateProductResponse, ClientError> {
        let url = self.endpoint(CREATE_PRODUCT_PATH)?;
        let form = product_form(draft)?;
        tracing::debug!(
            url = %url,
            name = %draft.name,
            photo = %draft.photo.name(),
            photo_bytes = draft.photo.len(),
            "submitting product"
        );
        let response = self.client.post(url.clone()).multipart(form).send().await?;
        Self::decode(response, &url).await
    }

    /// Resolves an absolute endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join {path}: {e}"),
            })
    }

    /// Asserts a 2xx status and parses the body as `T`.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &Url,
    ) -> Result<T, ClientError> {
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
