use thiserror::Error;

/// Fatal configuration problems detected before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0}; set it in a .env file or the process environment")]
    MissingApiKey(&'static str),
}

/// Failures at the data-provider boundary.
///
/// Aggregation itself never errors; everything that can go wrong happens
/// here or earlier in configuration.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-2xx status. The raw body is kept
    /// for operator debugging.
    #[error("provider returned HTTP {status} {reason}: {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// Transport-level failure (DNS, TLS, connect, decode).
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
}
