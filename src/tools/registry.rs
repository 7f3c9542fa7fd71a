use crate::catalog;
use crate::config::ApiConfig;
use crate::input::extract_params;
use crate::mcp::contracts;
use crate::tools::ToolResult;
use crate::tools::descriptor::EndpointDescriptor;
use crate::tools::error::ToolError;
use crate::tools::request::build_request;
use crate::tools::response::map_response;
use crate::tools::transport::Transport;
use serde_json::json;

/// Name → descriptor table bound to one configuration and one transport.
///
/// Holds no mutable state, so calls may run concurrently from any number of threads.
pub struct ToolRegistry {
    config: ApiConfig,
    transport: Box<dyn Transport>,
    tools: Vec<&'static EndpointDescriptor>,
}

impl ToolRegistry {
    pub fn new(config: ApiConfig, transport: Box<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            tools: catalog::endpoints().collect(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tools(&self) -> &[&'static EndpointDescriptor] {
        &self.tools
    }

    /// MCP tool definitions in catalog order.
    pub fn definitions(&self) -> Vec<serde_json::Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": contracts::input_schema(tool)
                })
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&'static EndpointDescriptor> {
        self.tools.iter().copied().find(|tool| tool.name == name)
    }

    pub fn call(&self, name: &str, args: &serde_json::Value) -> ToolResult {
        match self.get(name) {
            Some(descriptor) => self.invoke(descriptor, args),
            None => {
                tracing::warn!(tool = name, "unknown tool");
                ToolError::UnknownTool(name.to_string()).into()
            }
        }
    }

    pub fn invoke(&self, descriptor: &EndpointDescriptor, args: &serde_json::Value) -> ToolResult {
        match self.try_invoke(descriptor, args) {
            Ok(text) => ToolResult::Success(text),
            Err(err) => {
                tracing::warn!(tool = descriptor.name, kind = err.kind(), "tool call failed");
                err.into()
            }
        }
    }

    fn try_invoke(
        &self,
        descriptor: &EndpointDescriptor,
        args: &serde_json::Value,
    ) -> Result<String, ToolError> {
        let params = extract_params(args, descriptor.params)?;
        let request = build_request(&self.config, descriptor, &params)?;
        tracing::info!(
            tool = descriptor.name,
            method = descriptor.method.as_str(),
            path = descriptor.path,
            "calling remote API"
        );
        tracing::debug!(url = %request.url, "request built");

        let response = self.transport.execute(&request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "response received");
        map_response(&response, descriptor.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;
    use crate::tools::request::HttpRequest;
    use crate::tools::transport::HttpResponse;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingTransport {
        calls: Arc<Mutex<Vec<HttpRequest>>>,
        status: u16,
        body: &'static str,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                ..Self::default()
            }
        }

        fn urls(&self) -> Vec<String> {
            self.calls
                .lock()
                .expect("lock")
                .iter()
                .map(|request| request.url.clone())
                .collect()
        }
    }

    impl Transport for RecordingTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ToolError> {
            self.calls.lock().expect("lock").push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ToolError> {
            Err(ToolError::Transport("connection refused".to_string()))
        }
    }

    fn registry(transport: RecordingTransport) -> ToolRegistry {
        ToolRegistry::new(
            ApiConfig::new("https://quotes.test", None),
            Box::new(transport),
        )
    }

    #[test]
    fn optional_subset_in_declared_order() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = registry(transport.clone());

        let args = json!({"sfw": true, "limit": 3, "author": "Twain"});
        let result = registry.call("get_quote_search", &args);

        assert!(!result.is_error());
        assert_eq!(
            transport.urls(),
            ["https://quotes.test/quote/search?author=Twain&limit=3&sfw=true"]
        );
    }

    #[test]
    fn empty_bag_has_no_query_string() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = registry(transport.clone());

        for descriptor in registry.tools().iter().filter(|d| d.required_params().next().is_none()) {
            registry.invoke(descriptor, &json!({}));
        }

        let urls = transport.urls();
        assert!(!urls.is_empty());
        assert!(urls.iter().all(|url| !url.contains('?')), "{urls:?}");
    }

    #[test]
    fn malformed_arguments_never_reach_the_network() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = registry(transport.clone());

        let result = registry.call("get_quote_search", &json!("category=inspire"));

        assert_eq!(
            result,
            ToolResult::Error {
                kind: errors::INVALID_INPUT,
                message: "Invalid arguments object".to_string(),
            }
        );
        assert!(transport.urls().is_empty());
    }

    #[test]
    fn missing_required_never_reaches_the_network() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = registry(transport.clone());

        let result = registry.call("post_quote", &json!({"author": "Me"}));

        assert_eq!(result.text(), "missing required parameter: quote");
        assert!(transport.urls().is_empty());
    }

    #[test]
    fn remote_error_becomes_error_result() {
        let registry = registry(RecordingTransport::replying(404, "not found"));
        let result = registry.call("get_quote", &json!({"id": "nope"}));
        assert_eq!(
            result,
            ToolResult::Error {
                kind: errors::REMOTE_API,
                message: "API error: not found".to_string(),
            }
        );
    }

    #[test]
    fn quote_body_is_pretty_json() {
        let registry = registry(RecordingTransport::replying(200, r#"{"quote":"hi","id":"1"}"#));
        let result = registry.call("get_quote", &json!({"id": "1"}));
        let ToolResult::Success(text) = result else {
            panic!("expected success");
        };
        assert!(text.contains("\n  \"quote\": \"hi\""));
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value, json!({"quote": "hi", "id": "1"}));
    }

    #[test]
    fn transport_failure_becomes_error_result() {
        let registry = ToolRegistry::new(
            ApiConfig::new("https://quotes.test", None),
            Box::new(FailingTransport),
        );
        let result = registry.call("get_qod", &json!({}));
        assert_eq!(
            result,
            ToolResult::Error {
                kind: errors::TRANSPORT,
                message: "Request failed: connection refused".to_string(),
            }
        );
    }

    #[test]
    fn unknown_tool_is_reported() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = registry(transport.clone());
        let result = registry.call("delete_quote", &json!({}));
        assert_eq!(result.text(), "Unknown tool: delete_quote");
        assert!(transport.urls().is_empty());
    }

    #[test]
    fn bad_base_url_fails_before_network() {
        let transport = RecordingTransport::replying(200, "{}");
        let registry = ToolRegistry::new(
            ApiConfig::new("quotes.test", None),
            Box::new(transport.clone()),
        );
        let result = registry.call("get_qod_languages", &json!({}));
        assert!(matches!(
            result,
            ToolResult::Error { kind: errors::REQUEST_CONSTRUCTION, .. }
        ));
        assert!(transport.urls().is_empty());
    }

    #[test]
    fn definitions_follow_catalog() {
        let registry = registry(RecordingTransport::default());
        let definitions = registry.definitions();
        assert_eq!(definitions.len(), registry.tools().len());

        let search = definitions
            .iter()
            .find(|tool| tool["name"] == "get_quote_search")
            .expect("search tool");
        assert_eq!(search["inputSchema"]["type"], json!("object"));
        assert!(search["description"].as_str().is_some_and(|text| !text.is_empty()));
    }
}
