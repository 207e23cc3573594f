//! Tool registry.
//!
//! Tools register themselves once at startup with a name, a description,
//! an explicit JSON schema for their arguments and a handler closure; the
//! server routes `tools/call` requests through here. A linear scan over
//! fourteen entries is plenty.

use serde_json::Value;

use super::protocol::ToolDescriptor;
use crate::error::ToolError;

/// How a tool call can fail.
#[derive(Debug)]
pub enum CallError {
    /// The arguments object is malformed (missing field, wrong type).
    /// Maps to JSON-RPC invalid-params.
    InvalidParams(String),
    /// A domain failure. Maps to an in-protocol tool error result.
    Tool(ToolError),
}

impl From<ToolError> for CallError {
    fn from(err: ToolError) -> CallError {
        CallError::Tool(err)
    }
}

/// Handler: arguments object in, rendered text out.
pub type Handler = Box<dyn Fn(&Value) -> Result<String, CallError>>;

/// A registered tool.
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    handler: Handler,
}

/// The set of tools the server exposes.
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Names must be unique; a duplicate is a programming
    /// error in the registration code.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        input_schema: Value,
        handler: impl Fn(&Value) -> Result<String, CallError> + 'static,
    ) {
        debug_assert!(
            self.tools.iter().all(|t| t.name != name),
            "duplicate tool name {name}"
        );
        self.tools.push(Tool {
            name,
            description,
            input_schema,
            handler: Box::new(handler),
        });
    }

    /// Descriptors for `tools/list`, in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| ToolDescriptor {
                name: t.name,
                description: t.description,
                input_schema: t.input_schema.clone(),
            })
            .collect()
    }

    /// Invoke a tool by name. `None` when no such tool is registered.
    pub fn call(&self, name: &str, arguments: &Value) -> Option<Result<String, CallError>> {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .map(|t| (t.handler)(arguments))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_registry() -> ToolRegistry {
        let mut reg = ToolRegistry::new();
        reg.register(
            "echo",
            "Echo the input back",
            json!({"type": "object", "properties": {"text": {"type": "string"}}}),
            |args| {
                let text = args
                    .get("text")
                    .and_then(Value::as_str)
                    .ok_or_else(|| CallError::InvalidParams("text is required".into()))?;
                Ok(text.to_string())
            },
        );
        reg
    }

    #[test]
    fn test_register_and_call() {
        let reg = sample_registry();
        assert_eq!(reg.len(), 1);
        let out = reg.call("echo", &json!({"text": "hi"})).unwrap().unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_unknown_tool_is_none() {
        let reg = sample_registry();
        assert!(reg.call("missing", &json!({})).is_none());
    }

    #[test]
    fn test_bad_args_are_invalid_params() {
        let reg = sample_registry();
        let err = reg.call("echo", &json!({})).unwrap().unwrap_err();
        assert!(matches!(err, CallError::InvalidParams(_)));
    }

    #[test]
    fn test_descriptors_expose_schema() {
        let reg = sample_registry();
        let descs = reg.descriptors();
        assert_eq!(descs[0].name, "echo");
        assert_eq!(descs[0].input_schema["type"], "object");
    }
}
