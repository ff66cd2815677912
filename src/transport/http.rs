// src/transport/http.rs

use async_trait::async_trait;
use tracing::debug;

use super::Transport;
use crate::request::{ApiRequest, Method};

/// reqwest-backed transport. One pooled client is shared by every call.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = reqwest::Response;
    type Error = reqwest::Error;

    fn transport_name(&self) -> &str {
        "reqwest"
    }

    async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, reqwest::Error> {
        debug!(method = ?request.method, url = %request.url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!(url = %request.url, status = %response.status(), "response received");
        Ok(response)
    }
}
