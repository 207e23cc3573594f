//! Stdio server loop.
//!
//! MCP's default transport: one JSON-RPC message per line on stdin, one
//! response per line on stdout. Logs go to stderr — stdout belongs to the
//! protocol. The loop is synchronous and single-threaded; every tool is a
//! bounded pure function over static tables, so there is nothing to await
//! and nothing to lock.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use super::protocol::{codes, Request, Response, ToolCallResult, JSONRPC_VERSION, PROTOCOL_VERSION};
use super::registry::{CallError, ToolRegistry};

/// The MCP server: a registry plus the message pump.
pub struct Server {
    registry: ToolRegistry,
}

impl Server {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Read requests from stdin until EOF, answering on stdout.
    pub fn run(&self) -> io::Result<()> {
        eprintln!(
            "[MCP] benchtop serving {} tools on stdio",
            self.registry.len()
        );

        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line) {
                let text = serde_json::to_string(&response).map_err(io::Error::other)?;
                stdout.write_all(text.as_bytes())?;
                stdout.write_all(b"\n")?;
                stdout.flush()?;
            }
        }

        eprintln!("[MCP] stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. `None` means nothing should be written back
    /// (notifications, or unknown notifications).
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(request),
            Err(err) => Some(Response::err(
                Value::Null,
                codes::PARSE_ERROR,
                format!("parse error: {err}"),
            )),
        }
    }

    fn handle_request(&self, request: Request) -> Option<Response> {
        if !request.jsonrpc.is_empty() && request.jsonrpc != JSONRPC_VERSION {
            let id = request.id.unwrap_or(Value::Null);
            return Some(Response::err(
                id,
                codes::INVALID_REQUEST,
                "unsupported jsonrpc version",
            ));
        }

        eprintln!("[MCP] <- {}", request.method);

        match request.method.as_str() {
            "initialize" => {
                let id = request.id.unwrap_or(Value::Null);
                Some(Response::ok(
                    id,
                    json!({
                        "protocolVersion": PROTOCOL_VERSION,
                        "capabilities": { "tools": {} },
                        "serverInfo": {
                            "name": "benchtop",
                            "version": env!("CARGO_PKG_VERSION"),
                        },
                    }),
                ))
            }
            "notifications/initialized" => None,
            "ping" => {
                let id = request.id.unwrap_or(Value::Null);
                Some(Response::ok(id, json!({})))
            }
            "tools/list" => {
                let id = request.id.unwrap_or(Value::Null);
                Some(Response::ok(
                    id,
                    json!({ "tools": self.registry.descriptors() }),
                ))
            }
            "tools/call" => {
                let id = request.id.unwrap_or(Value::Null);
                Some(self.handle_tool_call(id, &request.params))
            }
            _ if request.is_notification() => None,
            other => {
                let id = request.id.unwrap_or(Value::Null);
                Some(Response::err(
                    id,
                    codes::METHOD_NOT_FOUND,
                    format!("unknown method '{other}'"),
                ))
            }
        }
    }

    fn handle_tool_call(&self, id: Value, params: &Value) -> Response {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Response::err(id, codes::INVALID_PARAMS, "tools/call requires a tool name");
        };
        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match self.registry.call(name, &arguments) {
            None => Response::err(
                id,
                codes::INVALID_PARAMS,
                format!("unknown tool '{name}'"),
            ),
            Some(Ok(text)) => {
                let result = ToolCallResult::text(text);
                Response::ok(id, serde_json::to_value(result).unwrap_or(Value::Null))
            }
            Some(Err(CallError::InvalidParams(message))) => {
                Response::err(id, codes::INVALID_PARAMS, message)
            }
            Some(Err(CallError::Tool(err))) => {
                // Domain failures stay in-protocol: the model client sees
                // them as a tool result flagged isError.
                eprintln!("[MCP] tool {name} failed: {err}");
                let result = ToolCallResult::error(format!("Error: {err}"));
                Response::ok(id, serde_json::to_value(result).unwrap_or(Value::Null))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    fn test_server() -> Server {
        let mut registry = ToolRegistry::new();
        registry.register(
            "double",
            "Double a number",
            json!({"type": "object", "properties": {"n": {"type": "number"}}}),
            |args| {
                let n = args
                    .get("n")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| CallError::InvalidParams("n is required".into()))?;
                Ok(format!("{}", n * 2.0))
            },
        );
        registry.register(
            "always_fails",
            "Always returns a domain error",
            json!({"type": "object"}),
            |_| Err(CallError::Tool(ToolError::InvalidBandCount(7))),
        );
        Server::new(registry)
    }

    #[test]
    fn test_initialize_handshake() {
        let server = test_server();
        let resp = server
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "benchtop");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    }

    #[test]
    fn test_initialized_notification_is_silent() {
        let server = test_server();
        assert!(server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .is_none());
    }

    #[test]
    fn test_tools_list() {
        let server = test_server();
        let resp = server
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .unwrap();
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().len();
        assert_eq!(tools, 2);
    }

    #[test]
    fn test_tool_call_success() {
        let server = test_server();
        let resp = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"double","arguments":{"n":21}}}"#,
            )
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "42");
    }

    #[test]
    fn test_tool_domain_error_stays_in_protocol() {
        let server = test_server();
        let resp = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"always_fails"}}"#,
            )
            .unwrap();
        assert!(resp.error.is_none(), "domain failure must not be an RPC error");
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: "));
    }

    #[test]
    fn test_invalid_params_is_rpc_error() {
        let server = test_server();
        let resp = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"double","arguments":{}}}"#,
            )
            .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_tool() {
        let server = test_server();
        let resp = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"nope"}}"#,
            )
            .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_method() {
        let server = test_server();
        let resp = server
            .handle_line(r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#)
            .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_parse_error() {
        let server = test_server();
        let resp = server.handle_line("not json at all").unwrap();
        assert_eq!(resp.error.unwrap().code, codes::PARSE_ERROR);
    }
}
