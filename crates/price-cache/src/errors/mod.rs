//! Error types and failure classification for the price cache.
//!
//! This module provides:
//! - [`PriceError`]: The error enum for every upstream and lookup failure
//! - [`FailureKind`]: Coarse classification used when logging failures

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while looking up a price.
///
/// These never leave the cache's public lookup methods; they are logged and
/// turned into `None` or a fallback price at the boundary. Source
/// implementations and tests see them directly.
#[derive(Error, Debug)]
pub enum PriceError {
    /// The request did not complete within the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The upstream that timed out
        provider: String,
    },

    /// The request failed before a response was received.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The upstream being contacted
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The upstream rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The upstream that rate limited the request
        provider: String,
    },

    /// The upstream returned a non-success status.
    #[error("Unexpected status from {provider}: {status}")]
    Status {
        /// The upstream that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be interpreted.
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// The upstream that sent the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// The upstream answered but did not include the requested asset.
    #[error("Asset missing from response: {0}")]
    AssetMissing(String),

    /// An empty asset identifier was passed in.
    #[error("Asset id must not be empty")]
    EmptyAssetId,

    /// A history window of zero days was requested.
    #[error("History window must be at least one day, got {0}")]
    InvalidDays(u32),

    /// The HTTP client or another component could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PriceError {
    /// Returns the failure class for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use adtivity_price_cache::errors::{FailureKind, PriceError};
    ///
    /// let error = PriceError::Timeout { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Transport);
    ///
    /// let error = PriceError::AssetMissing("bsc".to_string());
    /// assert_eq!(error.kind(), FailureKind::Payload);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => FailureKind::Transport,

            Self::RateLimited { .. } | Self::Status { .. } => FailureKind::UpstreamStatus,

            Self::MalformedPayload { .. } | Self::AssetMissing(_) => FailureKind::Payload,

            Self::EmptyAssetId | Self::InvalidDays(_) | Self::Config(_) => {
                FailureKind::InvalidRequest
            }
        }
    }

    /// Maps a `reqwest` error from the given upstream into a `PriceError`.
    pub(crate) fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if err.is_decode() {
            Self::MalformedPayload {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }
}
