use serde_json::json;

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod request;
pub mod response;
pub mod transport;

use error::ToolError;

/// Outcome of one tool call. Exactly one per invocation, never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Success(String),
    Error { kind: &'static str, message: String },
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Error { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            ToolResult::Success(text) => text,
            ToolResult::Error { message, .. } => message,
        }
    }

    pub fn into_value(self, tool: Option<&str>) -> serde_json::Value {
        match self {
            ToolResult::Success(text) => text_result(text),
            ToolResult::Error { kind, message } => error_result(kind, message, tool),
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        ToolResult::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

pub fn text_result(text: impl Into<String>) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    tool: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(tool) = tool
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("tool".to_string(), json!(tool));
    }

    json!({
        "content": [{"type": "text", "text": message}],
        "structuredContent": {"error": error},
        "isError": true
    })
}
