//! Configuration validation
//!
//! Validates configuration and reports issues.

use super::types::Config;

/// Result of configuration validation
#[derive(Debug, Clone)]
pub struct ConfigValidationResult {
    /// Whether the config is valid
    pub valid: bool,
    /// Validation errors (critical)
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings (non-critical)
    pub warnings: Vec<ValidationIssue>,
}

impl ConfigValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        ConfigValidationResult {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn with_error(mut self, issue: ValidationIssue) -> Self {
        self.valid = false;
        self.errors.push(issue);
        self
    }

    /// Add a warning
    pub fn with_warning(mut self, issue: ValidationIssue) -> Self {
        self.warnings.push(issue);
        self
    }
}

/// A validation issue
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the config field
    pub path: String,
    /// Issue message
    pub message: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new issue
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Validate the configuration
pub fn validate_config(config: &Config) -> ConfigValidationResult {
    let mut result = ConfigValidationResult::valid();

    result = validate_ollama_config(config, result);
    result = validate_agent_config(config, result);
    result = validate_server_config(config, result);

    result
}

fn validate_ollama_config(config: &Config, mut result: ConfigValidationResult) -> ConfigValidationResult {
    if config.ollama.model.trim().is_empty() {
        result = result.with_error(
            ValidationIssue::new("ollama.model", "No model configured")
                .with_suggestion("Set OLLAMA_MODEL, e.g. llama3.2:3b"),
        );
    }

    match url::Url::parse(&config.ollama.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => {
            result = result.with_error(ValidationIssue::new(
                "ollama.base_url",
                format!("Unsupported URL scheme: {}", url.scheme()),
            ));
        }
        Err(e) => {
            result = result.with_error(
                ValidationIssue::new("ollama.base_url", format!("Invalid URL: {}", e))
                    .with_suggestion("Use the Ollama API address, e.g. http://localhost:11434"),
            );
        }
    }

    result
}

fn validate_agent_config(config: &Config, mut result: ConfigValidationResult) -> ConfigValidationResult {
    if config.agent.max_turns == 0 {
        result = result.with_error(
            ValidationIssue::new("agent.max_turns", "Agent needs at least one turn to call a tool")
                .with_suggestion("Set agent.max_turns to 5"),
        );
    }

    if !(0.0..=2.0).contains(&config.agent.temperature) {
        result = result.with_warning(ValidationIssue::new(
            "agent.temperature",
            format!("Unusual temperature {}", config.agent.temperature),
        ));
    }

    result
}

fn validate_server_config(config: &Config, mut result: ConfigValidationResult) -> ConfigValidationResult {
    if config.server.port == 0 {
        result = result.with_error(ValidationIssue::new("server.port", "Port must not be 0"));
    }

    let loopback = matches!(config.server.bind.as_str(), "127.0.0.1" | "localhost" | "::1");
    if !loopback {
        result = result.with_warning(
            ValidationIssue::new(
                "server.bind",
                format!("Question form is reachable on {} without authentication", config.server.bind),
            )
            .with_suggestion("Bind to 127.0.0.1 unless the form must be shared"),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        let result = validate_config(&config);

        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        config.ollama.model = " ".to_string();
        config.ollama.base_url = "localhost".to_string();
        config.agent.max_turns = 0;

        let result = validate_config(&config);
        assert!(!result.valid);
        let paths: Vec<&str> = result.errors.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["ollama.model", "ollama.base_url", "agent.max_turns"]);
    }

    #[test]
    fn test_public_bind_warns() {
        let mut config = Config::default();
        config.server.bind = "0.0.0.0".to_string();

        let result = validate_config(&config);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "server.bind");
    }
}
