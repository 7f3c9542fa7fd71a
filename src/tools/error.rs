use crate::mcp::errors;

/// Terminal failure of a single tool call. `Display` is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments object")]
    MalformedInput,
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Failed to create request: {0}")]
    RequestConstruction(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to read response body: {0}")]
    ResponseBody(String),
    #[error("API error: {0}")]
    RemoteApi(String),
}

impl ToolError {
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::MalformedInput | ToolError::MissingParameter(_) => errors::INVALID_INPUT,
            ToolError::UnknownTool(_) => errors::UNKNOWN_TOOL,
            ToolError::RequestConstruction(_) => errors::REQUEST_CONSTRUCTION,
            ToolError::Transport(_) | ToolError::ResponseBody(_) => errors::TRANSPORT,
            ToolError::RemoteApi(_) => errors::REMOTE_API,
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() {
            return Self::RequestConstruction(value.to_string());
        }
        Self::Transport(value.to_string())
    }
}
