//! Provider configuration types
//!
//! Configuration for the local Ollama server the agent talks to.

use serde::{Deserialize, Serialize};

/// Ollama configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Local model identifier
    #[serde(default = "default_ollama_model")]
    pub model: String,
    /// Base URL of the Ollama API
    #[serde(default = "default_ollama_url")]
    pub base_url: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        OllamaConfig {
            model: default_ollama_model(),
            base_url: default_ollama_url(),
        }
    }
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}
