//! Tools module - equipment tools exposed to the agent
//!
//! Each tool implements the `Tool` trait and is registered into a
//! `ToolRegistry`, which the agent layer bridges into the LLM framework.
//!
//! ## Built-in Tools
//!
//! - **technical_document_lookup**: technical specs for an exact equipment code
//! - **equipment_history**: purchase/service history for an exact equipment code
//! - **email_vendor**: simulated vendor email, code searched for in free text

mod equipment;
mod registry;
mod traits;

// Core trait and types
pub use traits::{Tool, ToolCall, ToolDefinition, ToolInput, ToolResult};

// Registry
pub use registry::ToolRegistry;

// Built-in tools
pub use equipment::EquipmentTool;
