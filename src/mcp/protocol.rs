//! JSON-RPC 2.0 and MCP message types.
//!
//! Only the subset an MCP tool server needs: `initialize`, the
//! `notifications/initialized` notification, `ping`, `tools/list` and
//! `tools/call`. Field names follow the MCP wire format (camelCase where
//! the protocol says so), so these structs serialize straight onto stdout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes.
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
}

/// An incoming request or notification.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: String,
    /// Absent for notifications; notifications never get a response.
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Request {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An outgoing response. Exactly one of `result`/`error` is set.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl Response {
    pub fn ok(id: Value, result: Value) -> Response {
        Response {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Value, code: i64, message: impl Into<String>) -> Response {
        Response {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Entry in the `tools/list` response.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// One content block of a tool result. This server only emits text.
#[derive(Debug, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Result payload of `tools/call`.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn text(text: String) -> ToolCallResult {
        ToolCallResult {
            content: vec![ToolContent { kind: "text", text }],
            is_error: false,
        }
    }

    /// A tool-level failure: stays inside the protocol as a result with
    /// `isError`, not a JSON-RPC error.
    pub fn error(text: String) -> ToolCallResult {
        ToolCallResult {
            content: vec![ToolContent { kind: "text", text }],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_parses_notification() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert!(req.is_notification());
        assert_eq!(req.method, "notifications/initialized");
    }

    #[test]
    fn test_response_skips_absent_fields() {
        let ok = Response::ok(json!(1), json!({"x": 1}));
        let text = serde_json::to_string(&ok).unwrap();
        assert!(!text.contains("error"));

        let err = Response::err(json!(2), codes::METHOD_NOT_FOUND, "nope");
        let text = serde_json::to_string(&err).unwrap();
        assert!(!text.contains("result"));
        assert!(text.contains("-32601"));
    }

    #[test]
    fn test_tool_result_wire_names() {
        let result = ToolCallResult::error("Error: bad".to_string());
        let text = serde_json::to_string(&result).unwrap();
        assert!(text.contains(r#""isError":true"#));
        assert!(text.contains(r#""type":"text""#));
    }
}
