//! Equipment tools
//!
//! One tool per dispatcher intent. Each takes a single free-text input and
//! answers with the canned string for that intent.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::traits::{Tool, ToolInput, ToolResult};
use crate::equipment::{self, Intent};
use crate::error::Result;

/// Built-in tool: equipment lookup/email for one intent
pub struct EquipmentTool {
    intent: Intent,
}

impl EquipmentTool {
    pub fn new(intent: Intent) -> Self {
        EquipmentTool { intent }
    }

    pub fn technical_lookup() -> Self {
        Self::new(Intent::TechnicalLookup)
    }

    pub fn history() -> Self {
        Self::new(Intent::History)
    }

    pub fn email_vendor() -> Self {
        Self::new(Intent::EmailVendor)
    }

    /// Run the dispatcher directly, without argument parsing
    pub fn answer(&self, input: &str) -> String {
        equipment::dispatch(self.intent, input)
    }
}

#[async_trait]
impl Tool for EquipmentTool {
    fn name(&self) -> &str {
        match self.intent {
            Intent::TechnicalLookup => "technical_document_lookup",
            Intent::History => "equipment_history",
            Intent::EmailVendor => "email_vendor",
        }
    }

    fn description(&self) -> &str {
        match self.intent {
            Intent::TechnicalLookup => {
                "Use to retrieve technical specifications for an equipment code \
                 (pattern EQ#####). Input must be just the equipment code."
            }
            Intent::History => {
                "Use to fetch service/purchase history for an equipment code \
                 (pattern EQ#####). Input must be just the equipment code."
            }
            Intent::EmailVendor => {
                "Use to draft/send an email to the vendor about an equipment. \
                 Input can be natural language and should include the equipment code \
                 (pattern EQ#####) and any message details."
            }
        }
    }

    fn parameters_schema(&self) -> Value {
        ToolInput::schema()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let ToolInput { input } = ToolInput::from_args(args)?;
        debug!(tool = self.name(), input = %input, "Executing equipment tool");

        let code = equipment::resolve(&input, self.intent.mode());
        let known = code
            .as_ref()
            .is_some_and(|c| c.is_in(self.intent.known_codes()));
        info!(tool = self.name(), code = ?code, known, "Equipment request resolved");

        Ok(ToolResult::success_with_metadata(
            self.answer(&input),
            json!({
                "intent": self.intent,
                "code": code,
                "known": known,
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::catalog;

    #[tokio::test]
    async fn test_technical_lookup_tool() {
        let tool = EquipmentTool::technical_lookup();
        let result = tool.execute(json!({ "input": "eq67890" })).await.unwrap();
        assert!(result.success);
        assert!(result.content.unwrap().starts_with("Technical details for EQ67890"));
        let meta = result.metadata.unwrap();
        assert_eq!(meta["intent"], "technical_lookup");
        assert_eq!(meta["code"], "EQ67890");
        assert_eq!(meta["known"], true);
    }

    #[tokio::test]
    async fn test_history_tool_unknown() {
        let tool = EquipmentTool::history();
        let result = tool.execute(json!("EQ67890")).await.unwrap();
        assert_eq!(result.content.as_deref(), Some("No history found for EQ67890."));
        assert_eq!(result.metadata.unwrap()["known"], false);
    }

    #[tokio::test]
    async fn test_email_tool_without_code() {
        let tool = EquipmentTool::email_vendor();
        let result = tool.execute(json!({ "input": "hello vendor" })).await.unwrap();
        assert_eq!(result.content.as_deref(), Some(catalog::EMAIL_NO_CODE));
        assert!(result.metadata.unwrap()["code"].is_null());
    }

    #[tokio::test]
    async fn test_missing_input_is_error() {
        let tool = EquipmentTool::history();
        assert!(tool.execute(json!({})).await.is_err());
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<String> = Intent::ALL
            .into_iter()
            .map(|i| EquipmentTool::new(i).name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["technical_document_lookup", "equipment_history", "email_vendor"]
        );
    }
}
