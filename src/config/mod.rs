//! Configuration module
//!
//! - types/mod.rs: Core configuration types (Config, AgentConfig, etc.)
//! - types/provider.rs: Ollama provider configuration
//! - io.rs: Configuration loading and saving
//! - validation.rs: Configuration validation
//! - paths.rs: Configuration file paths

mod io;
mod paths;
mod types;
mod validation;

// Re-export core config types
pub use types::{AgentConfig, Config, LogConfig, LogFormat, ServerConfig};

// Re-export provider types
pub use types::provider::OllamaConfig;

// Re-export IO and utilities
pub use io::{
    apply_env_overrides, apply_overrides_from, effective_config, effective_config_from,
    load_config_at, load_config_from_path, read_config_snapshot, save_config,
    ConfigSnapshot,
};
pub use paths::{config_dir, config_path};
pub use validation::{validate_config, ConfigValidationResult, ValidationIssue};
