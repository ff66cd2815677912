// src/error.rs

/// Errors raised while configuring the forwarder. Per-call failures are
/// never wrapped here; they come back as the transport's own error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("endpoint {0:?} cannot carry a sub-path (query, fragment or opaque URL)")]
    NotABase(String),

    #[error("unsupported endpoint scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}
