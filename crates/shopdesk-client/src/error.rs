use thiserror::Error;

/// Errors returned by [`crate::CatalogClient`].
///
/// Every variant means the exchange did not yield a usable response body;
/// a well-formed `{"success": false}` reply is not an error at this layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, timeout, or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
