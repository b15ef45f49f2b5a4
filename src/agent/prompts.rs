//! Prompt templates and engineering

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

/// Wraps every user question before it reaches the model.
///
/// Asks for a short answer and at most one tool instead of free-form
/// chain-of-thought, which small local models tend to loop on.
pub const QUESTION_TEMPLATE: &str = "{{question}}\n\n\
Answer succinctly. If a tool is needed, pick exactly one tool and explain briefly why.";

/// Default system prompt for the equipment assistant
pub const DEFAULT_PREAMBLE: &str = "You are an equipment support assistant. \
Equipment is identified by codes of the form EQ followed by five digits (for example EQ12345). \
Use the available tools to look up technical details, look up purchase and service history, \
or send an email to the vendor. Pass the equipment code, or for email the full request, \
as the tool input. Base your answer on the tool output and do not invent equipment data.";

/// A prompt template using Handlebars syntax
///
/// Output is plain text: values are inserted without HTML escaping.
pub struct PromptTemplate {
    /// Template name
    name: String,
    /// Handlebars registry
    registry: Handlebars<'static>,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(name: impl Into<String>, template: &str) -> Result<Self> {
        let name = name.into();
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_template_string(&name, template)?;

        Ok(PromptTemplate { name, registry })
    }

    /// Render the template with given data
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        Ok(self.registry.render(&self.name, data)?)
    }
}

#[derive(Serialize)]
struct QuestionContext<'a> {
    question: &'a str,
}

/// Template applied to user questions
pub fn question_template() -> Result<PromptTemplate> {
    PromptTemplate::new("question", QUESTION_TEMPLATE)
}

/// Render a user question through [`QUESTION_TEMPLATE`]
pub fn normalize_question(template: &PromptTemplate, question: &str) -> Result<String> {
    template.render(&QuestionContext { question })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_question() {
        let template = question_template().unwrap();
        let prompt = normalize_question(&template, "History EQ12345").unwrap();
        assert_eq!(
            prompt,
            "History EQ12345\n\nAnswer succinctly. If a tool is needed, pick exactly one tool and explain briefly why."
        );
    }

    #[test]
    fn test_question_is_not_escaped() {
        let template = question_template().unwrap();
        let prompt = normalize_question(&template, "Is <EQ12345> \"ok\" & ready?").unwrap();
        assert!(prompt.starts_with("Is <EQ12345> \"ok\" & ready?\n\n"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let template = PromptTemplate::new("t", "{{missing}}").unwrap();
        assert!(template.render(&serde_json::json!({})).is_err());
    }

    #[test]
    fn test_invalid_template() {
        assert!(PromptTemplate::new("bad", "{{#if}}").is_err());
    }
}
