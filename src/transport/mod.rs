// src/transport/mod.rs

use async_trait::async_trait;

use crate::request::ApiRequest;

/// Sends a built request and hands back whatever the underlying client
/// produced. Implementations must not inspect status codes or bodies.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    fn transport_name(&self) -> &str;

    async fn send(&self, request: ApiRequest) -> Result<Self::Response, Self::Error>;
}

// Module declarations
pub mod http;
pub mod mocks;

pub use http::HttpTransport;
pub use mocks::{MockResponse, MockTransport, MockTransportError};
