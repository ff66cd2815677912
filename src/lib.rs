// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod request;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::{Endpoint, ForwarderConfig, DEFAULT_ENDPOINT};
pub use error::ConfigError;
pub use forwarder::RequestForwarder;
pub use request::{ApiRequest, Method};
pub use transport::{HttpTransport, MockTransport, Transport};
pub use types::ModuleName;
