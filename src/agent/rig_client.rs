//! Rig Ollama agent wrapper
//!
//! Builds a rig-core agent on top of a local Ollama model, hands it the
//! equipment tools and answers questions through the [`Assistant`] trait.
//! Tool selection and the call/observe loop belong to rig.

use async_trait::async_trait;
use rig::agent::Agent;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Prompt;
use rig::providers::ollama;
use rig::tool::ToolDyn;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::prompts::{self, PromptTemplate};
use super::tool_bridge::ToolRegistryRigExt;
use super::Assistant;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::tools::ToolRegistry;

/// Ollama-backed tool-calling agent
pub struct OllamaAgent {
    agent: Agent<ollama::CompletionModel>,
    model: String,
    max_turns: usize,
    question_template: PromptTemplate,
}

impl OllamaAgent {
    /// Build an agent from config with every tool in `registry`
    ///
    /// rig's tool server is spawned on the current tokio runtime, so this
    /// must be called from within one.
    pub fn new(config: &Config, registry: &ToolRegistry) -> Result<Self> {
        let client = ollama::Client::builder()
            .api_key(Nothing)
            .base_url(&config.ollama.base_url)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create Ollama client: {}", e)))?;

        let preamble = config
            .agent
            .preamble
            .as_deref()
            .unwrap_or(prompts::DEFAULT_PREAMBLE);

        let tools: Vec<Box<dyn ToolDyn>> = registry
            .to_rig_tools()
            .into_iter()
            .map(|tool| Box::new(tool) as Box<dyn ToolDyn>)
            .collect();

        let agent = client
            .agent(&config.ollama.model)
            .preamble(preamble)
            .temperature(config.agent.temperature)
            .tools(tools)
            .build();

        info!(
            model = %config.ollama.model,
            base_url = %config.ollama.base_url,
            tools = registry.count(),
            max_turns = config.agent.max_turns,
            "Ollama agent ready"
        );

        Ok(OllamaAgent {
            agent,
            model: config.ollama.model.clone(),
            max_turns: config.agent.max_turns,
            question_template: prompts::question_template()?,
        })
    }
}

#[async_trait]
impl Assistant for OllamaAgent {
    fn model(&self) -> &str {
        &self.model
    }

    async fn ask(&self, question: &str) -> Result<String> {
        let prompt = prompts::normalize_question(&self.question_template, question)?;
        debug!(model = %self.model, prompt = %prompt, "Prompting agent");

        let started = Instant::now();
        let answer: String = self
            .agent
            .prompt(prompt.as_str())
            .max_turns(self.max_turns)
            .await
            .map_err(|e| {
                warn!(model = %self.model, error = %e, "Agent run failed");
                Error::Provider(format!("Ollama agent failed: {}", e))
            })?;

        info!(
            model = %self.model,
            duration_ms = started.elapsed().as_millis() as u64,
            answer_len = answer.len(),
            "Agent answered"
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_agent_creation() {
        let config = Config::default();
        let registry = ToolRegistry::with_equipment_tools();
        let agent = OllamaAgent::new(&config, &registry).unwrap();
        assert_eq!(agent.model(), "llama3.2:3b");
        assert_eq!(agent.max_turns, 5);
    }

    #[tokio::test]
    async fn test_agent_creation_uses_configured_url() {
        let mut config = Config::default();
        config.ollama.base_url = "http://127.0.0.1:9".to_string();
        config.ollama.model = "mistral".to_string();
        let registry = ToolRegistry::with_equipment_tools();

        let agent = OllamaAgent::new(&config, &registry).unwrap();
        assert_eq!(agent.model(), "mistral");
    }

    #[tokio::test]
    #[ignore] // Requires a running Ollama server with the model pulled
    async fn test_ask_history() {
        let config = Config::default();
        let registry = ToolRegistry::with_equipment_tools();
        let agent = OllamaAgent::new(&config, &registry).unwrap();
        let answer = agent.ask("History EQ12345").await.unwrap();
        assert!(answer.contains("2023-01-15") || answer.contains("2024-06-10"));
    }
}
