// src/request.rs

use serde_json::{json, Value};

use crate::config::Endpoint;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound call, fully built before it reaches a transport.
///
/// Owns its URL and body, so concurrent requests never share state with each
/// other or with the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// POST `{moduleName, moduleParams}` to the module runner.
    pub fn module_runner(endpoint: &Endpoint, module_name: &str, module_params: Value) -> Self {
        Self::custom(
            endpoint,
            MODULE_RUNNER_PATH,
            json!({
                FIELD_MODULE_NAME: module_name,
                FIELD_MODULE_PARAMS: module_params,
            }),
        )
    }

    /// POST an arbitrary body to `sub_path`.
    pub fn custom(endpoint: &Endpoint, sub_path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: endpoint.join(sub_path),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn normalize_apt(endpoint: &Endpoint, apt: &str) -> Self {
        Self::custom(endpoint, NORMALIZE_APT_PATH, json!({ FIELD_APT: apt }))
    }

    pub fn module_inquiry(endpoint: &Endpoint, name: Option<&str>) -> Self {
        let query = name
            .map(|n| vec![(QUERY_MODULE_NAME.to_string(), n.to_string())])
            .unwrap_or_default();
        Self {
            method: Method::Get,
            url: endpoint.join(MODULE_INQUIRY_PATH),
            query,
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> Endpoint {
        Endpoint::new("http://localhost:8080/api/").unwrap()
    }

    #[test]
    fn test_coverability_graph_body() {
        let request = ApiRequest::module_runner(
            &local(),
            "coverability_graph",
            json!({ "pn": { "places": [], "transitions": [] } }),
        );

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8080/api/moduleRunner");
        assert_eq!(
            request.body.unwrap().to_string(),
            r#"{"moduleName":"coverability_graph","moduleParams":{"pn":{"places":[],"transitions":[]}}}"#
        );
    }

    #[test]
    fn test_normalize_apt_body() {
        let request = ApiRequest::normalize_apt(&local(), "net A {}");

        assert_eq!(request.url, "http://localhost:8080/api/normalizeApt");
        assert_eq!(request.body.unwrap().to_string(), r#"{"apt":"net A {}"}"#);
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_custom_body_unchanged() {
        let body = json!({ "anything": [1, 2, { "x": null }] });
        let request = ApiRequest::custom(&local(), "somewhere", body.clone());

        assert_eq!(request.url, "http://localhost:8080/api/somewhere");
        assert_eq!(request.body, Some(body));
    }

    #[test]
    fn test_module_params_passed_through_uninterpreted() {
        // Non-object params go through as-is; the server decides what is valid.
        let request = ApiRequest::module_runner(&local(), "examine_pn", json!("raw"));
        assert_eq!(
            request.body,
            Some(json!({ "moduleName": "examine_pn", "moduleParams": "raw" }))
        );
    }

    #[test]
    fn test_module_inquiry_list_and_single() {
        let list = ApiRequest::module_inquiry(&local(), None);
        assert_eq!(list.method, Method::Get);
        assert_eq!(list.url, "http://localhost:8080/api/moduleInquiry");
        assert!(list.query.is_empty());
        assert!(list.body.is_none());

        let single = ApiRequest::module_inquiry(&local(), Some("synthesize"));
        assert_eq!(
            single.query,
            vec![("name".to_string(), "synthesize".to_string())]
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        let params = json!({ "lts": "lts L {}", "options": "none" });
        let a = ApiRequest::module_runner(&local(), "synthesize", params.clone());
        let b = ApiRequest::module_runner(&local(), "synthesize", params);
        assert_eq!(a, b);
    }
}
