//! Agent module - LLM orchestration around the equipment tools
//!
//! - Prompt templates for the system preamble and user questions
//! - Bridge from equipdesk tools to rig-core tools
//! - Ollama-backed agent implementing [`Assistant`]

pub mod prompts;
mod rig_client;
mod tool_bridge;

use async_trait::async_trait;

use crate::error::Result;

pub use prompts::PromptTemplate;
pub use rig_client::OllamaAgent;
pub use tool_bridge::{RigToolAdapter, ToolRegistryRigExt};

/// Something that answers a free-text user question
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Model identifier behind this assistant
    fn model(&self) -> &str;

    /// Answer a question, calling tools as the model sees fit
    async fn ask(&self, question: &str) -> Result<String>;
}
