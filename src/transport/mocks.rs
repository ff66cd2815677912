// src/transport/mocks.rs

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::Transport;
use crate::request::{ApiRequest, Method};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("mock transport failure: {0}")]
pub struct MockTransportError(pub String);

/// Canned response; echoes the request it answers.
#[derive(Clone, Debug, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Offline transport that records every request. Clones share the record.
#[derive(Clone, Debug)]
pub struct MockTransport {
    pub name: String,
    pub status: u16,
    pub failure: Option<MockTransportError>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: 200,
            failure: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(MockTransportError(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new("mock")
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Response = MockResponse;
    type Error = MockTransportError;

    fn transport_name(&self) -> &str {
        &self.name
    }

    async fn send(&self, request: ApiRequest) -> Result<MockResponse, MockTransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(MockResponse {
            status: self.status,
            method: request.method,
            url: request.url,
            body: request.body,
        })
    }
}
