pub const INVALID_INPUT: &str = "invalid_input";
pub const UNKNOWN_TOOL: &str = "unknown_tool";
pub const REQUEST_CONSTRUCTION: &str = "request_construction";
pub const TRANSPORT: &str = "transport";
pub const REMOTE_API: &str = "remote_api";
