// src/forwarder.rs

use serde_json::{json, Value};
use tracing::debug;

use crate::config::{Endpoint, ForwarderConfig};
use crate::request::ApiRequest;
use crate::transport::Transport;
use crate::types::ModuleName;

/// Forwards analysis calls to the remote APT server.
///
/// Every call builds its own [`ApiRequest`] and returns the transport's
/// result untouched: a non-2xx status is still `Ok`, and a transport failure
/// comes back as the transport's own error value.
pub struct RequestForwarder<T> {
    transport: T,
    endpoint: Endpoint,
}

impl<T: Transport> RequestForwarder<T> {
    pub fn new(transport: T, endpoint: Endpoint) -> Self {
        Self { transport, endpoint }
    }

    pub fn from_config(transport: T, config: ForwarderConfig) -> Self {
        Self::new(transport, config.endpoint)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Affects requests built after this call only.
    pub fn set_endpoint(&mut self, endpoint: Endpoint) {
        self.endpoint = endpoint;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs `module_name` on the server with `module_params`.
    pub async fn invoke(
        &self,
        module_name: &str,
        module_params: Value,
    ) -> Result<T::Response, T::Error> {
        debug!(
            module = module_name,
            transport = self.transport.transport_name(),
            "invoking module"
        );
        let request = ApiRequest::module_runner(&self.endpoint, module_name, module_params);
        self.transport.send(request).await
    }

    /// POSTs `body` as-is to `sub_path`, bypassing the module envelope.
    pub async fn invoke_custom(
        &self,
        sub_path: &str,
        body: Value,
    ) -> Result<T::Response, T::Error> {
        debug!(sub_path, "invoking custom endpoint");
        let request = ApiRequest::custom(&self.endpoint, sub_path, body);
        self.transport.send(request).await
    }

    pub async fn get_coverability_graph(&self, pn: &Value) -> Result<T::Response, T::Error> {
        self.invoke(ModuleName::CoverabilityGraph.as_str(), json!({ "pn": pn }))
            .await
    }

    /// Without `options` the key is left out so the server applies its default.
    pub async fn get_synthesized_net(
        &self,
        lts: &Value,
        options: Option<&Value>,
    ) -> Result<T::Response, T::Error> {
        let mut params = json!({ "lts": lts });
        if let Some(options) = options {
            params["options"] = options.clone();
        }
        self.invoke(ModuleName::Synthesize.as_str(), params).await
    }

    pub async fn examine_pn(&self, pn: &Value) -> Result<T::Response, T::Error> {
        self.invoke(ModuleName::ExaminePn.as_str(), json!({ "pn": pn }))
            .await
    }

    pub async fn examine_lts(&self, lts: &Value) -> Result<T::Response, T::Error> {
        self.invoke(ModuleName::ExamineLts.as_str(), json!({ "lts": lts }))
            .await
    }

    pub async fn normalize_apt(&self, apt: &str) -> Result<T::Response, T::Error> {
        debug!("normalizing apt source");
        let request = ApiRequest::normalize_apt(&self.endpoint, apt);
        self.transport.send(request).await
    }

    /// Lists the modules the server is willing to run.
    pub async fn list_modules(&self) -> Result<T::Response, T::Error> {
        let request = ApiRequest::module_inquiry(&self.endpoint, None);
        self.transport.send(request).await
    }

    /// Parameters and return values of a single module.
    pub async fn describe_module(&self, name: &str) -> Result<T::Response, T::Error> {
        let request = ApiRequest::module_inquiry(&self.endpoint, Some(name));
        self.transport.send(request).await
    }
}
