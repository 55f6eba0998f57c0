//! Error types for directory client operations.
//!
//! This module defines the [`HttpError`] enum which encompasses all possible
//! failure modes when fetching and validating directory documents.

use thiserror::Error;

use crate::schema::CastError;

/// Errors that can occur during directory client operations.
///
/// The client never retries or recovers: whichever step fails first is
/// reported through one of these variants and the call ends.
///
/// # Error Categories
///
/// - **Network errors**: [`RequestFailed`](HttpError::RequestFailed)
/// - **Server errors**: [`ServerError`](HttpError::ServerError)
/// - **Configuration errors**: [`UrlError`](HttpError::UrlError),
///   [`InvalidEndpoint`](HttpError::InvalidEndpoint)
/// - **Payload errors**: [`JsonError`](HttpError::JsonError),
///   [`CastError`](HttpError::CastError)
///
/// # Example
///
/// ```rust,no_run
/// use cosmos_directory::http::HttpError;
///
/// fn handle_error(err: HttpError) {
///     match err {
///         HttpError::ServerError { status, body } => {
///             eprintln!("Directory returned {}: {}", status, body);
///         },
///         HttpError::CastError(e) => {
///             eprintln!("Unexpected document shape: {}", e);
///         },
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// This typically indicates connectivity issues such as:
    /// - Connection refused
    /// - Request timeout
    /// - DNS resolution failure
    /// - TLS handshake errors
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The server returned a non-success HTTP status code.
    ///
    /// Contains both the HTTP status code and the response body. The
    /// directory answers `404 Not Found` for unknown chain or validator paths.
    #[error("Server error {status}: {body}")]
    ServerError {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// Failed to parse a configured endpoint as a URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// An endpoint parsed as a URL but cannot carry path segments
    /// (e.g. `mailto:` or `data:` URLs).
    #[error("Endpoint {0} cannot be used as a base URL")]
    InvalidEndpoint(String),

    /// The response body is not JSON, or does not deserialise into the
    /// requested payload type.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response body is JSON but does not have the documented shape.
    #[error("Invalid directory response: {0}")]
    CastError(#[from] CastError),
}
