//! Tool registry - manages available tools for the agent

use std::collections::HashMap;
use std::sync::Arc;

use crate::equipment::Intent;
use crate::error::{Error, Result};

use super::equipment::EquipmentTool;
use super::traits::{Tool, ToolCall, ToolDefinition, ToolResult};

/// Registry of available tools
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Registry holding the three equipment tools
    pub fn with_equipment_tools() -> Self {
        let mut registry = Self::new();
        for intent in Intent::ALL {
            registry.register(EquipmentTool::new(intent));
        }
        registry
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all tool definitions, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.tools.values().map(|t| t.to_definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call
    pub async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        match self.get(&call.name) {
            Some(tool) => tool.execute(call.arguments.clone()).await,
            None => Err(Error::NotFound(format!("Unknown tool: {}", call.name))),
        }
    }

    /// Get tool count
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// List tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equipment_registry() {
        let registry = ToolRegistry::with_equipment_tools();
        assert_eq!(registry.count(), 3);
        assert_eq!(
            registry.names(),
            vec!["email_vendor", "equipment_history", "technical_document_lookup"]
        );
        assert!(registry.get("equipment_history").is_some());
        assert!(registry.get("Equipment History").is_none());
    }

    #[test]
    fn test_definitions_carry_schema() {
        let registry = ToolRegistry::with_equipment_tools();
        let defs = registry.definitions();
        assert_eq!(defs.len(), 3);
        assert!(defs.iter().all(|d| d.parameters["required"] == json!(["input"])));
    }

    #[tokio::test]
    async fn test_execute_call() {
        let registry = ToolRegistry::with_equipment_tools();
        let call = ToolCall::new("email_vendor", json!({ "input": "EQ99999 broken" }));
        let result = registry.execute(&call).await.unwrap();
        assert!(result
            .to_output()
            .starts_with("Failed to send email for EQ99999."));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = ToolRegistry::with_equipment_tools();
        let call = ToolCall::new("weather", json!({ "input": "EQ12345" }));
        let err = registry.execute(&call).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
