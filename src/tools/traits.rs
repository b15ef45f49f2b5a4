//! Core tool trait and result types

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A tool that can be called by the agent
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name
    fn name(&self) -> &str;

    /// Get the tool description
    fn description(&self) -> &str;

    /// Get the JSON Schema for tool parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with given arguments
    async fn execute(&self, args: Value) -> Result<ToolResult>;

    /// Describe this tool for listings and the agent framework
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// Name, description and parameter schema of a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Single free-text argument every equipment tool takes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolInput {
    /// Free-text input for the tool, e.g. an equipment code like EQ12345
    pub input: String,
}

impl ToolInput {
    /// Parse tool arguments
    ///
    /// Accepts `{"input": "..."}` as well as a bare JSON string, since some
    /// models pass the argument without wrapping it.
    pub fn from_args(args: Value) -> Result<Self> {
        match args {
            Value::String(input) => Ok(ToolInput { input }),
            other => serde_json::from_value(other)
                .map_err(|e| Error::InvalidInput(format!("Invalid tool arguments: {}", e))),
        }
    }

    /// JSON Schema for the argument object
    pub fn schema() -> Value {
        serde_json::to_value(schemars::schema_for!(ToolInput)).unwrap_or(Value::Null)
    }
}

/// Result of a tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the execution was successful
    pub success: bool,
    /// Result content (for successful execution)
    pub content: Option<String>,
    /// Error message (for failed execution)
    pub error: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        ToolResult {
            success: true,
            content: Some(content.into()),
            error: None,
            metadata: None,
        }
    }

    /// Create a successful result with metadata
    pub fn success_with_metadata(content: impl Into<String>, metadata: Value) -> Self {
        ToolResult {
            success: true,
            content: Some(content.into()),
            error: None,
            metadata: Some(metadata),
        }
    }

    /// Create a failed result
    pub fn failure(error: impl Into<String>) -> Self {
        ToolResult {
            success: false,
            content: None,
            error: Some(error.into()),
            metadata: None,
        }
    }

    /// Text handed back to the agent
    pub fn to_output(&self) -> String {
        if self.success {
            self.content.clone().unwrap_or_default()
        } else {
            format!("Error: {}", self.error.clone().unwrap_or_default())
        }
    }
}

/// A tool call request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub name: String,
    /// Tool arguments as JSON
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        ToolCall {
            name: name.into(),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_input_from_object() {
        let input = ToolInput::from_args(json!({ "input": "EQ12345" })).unwrap();
        assert_eq!(input.input, "EQ12345");
    }

    #[test]
    fn test_tool_input_from_bare_string() {
        let input = ToolInput::from_args(json!("history EQ12345")).unwrap();
        assert_eq!(input.input, "history EQ12345");
    }

    #[test]
    fn test_tool_input_rejects_missing_field() {
        let err = ToolInput::from_args(json!({ "code": "EQ12345" })).unwrap_err();
        assert!(err.is_client_error());
        assert!(ToolInput::from_args(json!(42)).is_err());
    }

    #[test]
    fn test_tool_input_schema() {
        let schema = ToolInput::schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["input"].is_object());
        assert_eq!(schema["required"], json!(["input"]));
    }

    #[test]
    fn test_tool_result_output() {
        assert_eq!(ToolResult::success("Done!").to_output(), "Done!");
        assert_eq!(ToolResult::failure("Oops!").to_output(), "Error: Oops!");
    }
}
