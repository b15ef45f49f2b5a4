//! Tool bridge - adapts equipdesk tools to rig-core's Tool trait

use crate::tools::{Tool, ToolRegistry};
use rig::completion::ToolDefinition;
use rig::tool::{Tool as RigTool, ToolError};
use std::sync::Arc;
use tracing::warn;

/// Adapter that wraps an equipdesk tool and implements rig's Tool trait
pub struct RigToolAdapter {
    /// The wrapped tool
    tool: Arc<dyn Tool>,
}

impl RigToolAdapter {
    /// Create a new adapter for a tool
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self { tool }
    }
}

impl RigTool for RigToolAdapter {
    const NAME: &'static str = "equipdesk_tool_adapter";

    type Error = ToolError;
    type Args = serde_json::Value;
    type Output = String;

    fn name(&self) -> String {
        self.tool.name().to_string()
    }

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        let def = self.tool.to_definition();
        ToolDefinition {
            name: def.name,
            description: def.description,
            parameters: def.parameters,
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let result = self.tool.execute(args).await.map_err(|e| {
            warn!(tool = self.tool.name(), error = %e, "Tool call rejected");
            ToolError::ToolCallError(Box::new(e))
        })?;

        if result.success {
            Ok(result.content.unwrap_or_default())
        } else {
            let error_msg = result.error.unwrap_or_else(|| "Tool execution failed".to_string());
            Err(ToolError::ToolCallError(error_msg.into()))
        }
    }
}

/// Extension trait for ToolRegistry to create rig tools
pub trait ToolRegistryRigExt {
    /// Wrap every registered tool, in name order
    fn to_rig_tools(&self) -> Vec<RigToolAdapter>;
}

impl ToolRegistryRigExt for ToolRegistry {
    fn to_rig_tools(&self) -> Vec<RigToolAdapter> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .map(RigToolAdapter::new)
            .collect()
    }
}
