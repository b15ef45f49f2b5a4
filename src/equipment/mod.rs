//! Equipment module - code resolution and canned-response dispatch
//!
//! This is the only decision logic equipdesk owns:
//! - `resolve` turns free text into an [`EquipmentCode`] (exact or search mode)
//! - `dispatch` answers an [`Intent`] with one of the strings in [`catalog`]
//!
//! Both are pure functions of their input. An unknown or missing code is a
//! normal answer, never an error.

pub mod catalog;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// A normalized (upper-cased, trimmed) equipment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentCode(String);

impl EquipmentCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code appears in a known set
    pub fn is_in(&self, known: &[&str]) -> bool {
        known.contains(&self.0.as_str())
    }
}

impl fmt::Display for EquipmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a candidate code is extracted from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// The whole trimmed, upper-cased input is the candidate
    Exact,
    /// First word-bounded `EQ` + 5 digits anywhere in the upper-cased input
    Search,
}

/// Characters stripped around an exact-mode code: Unicode whitespace plus
/// the ASCII separators U+001C..=U+001F
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(catalog::CODE_PATTERN).expect("code pattern is valid"))
}

/// Extract a candidate equipment code from `text`
///
/// Exact mode only returns `None` for blank input; whether the candidate is a
/// known code is the dispatcher's concern.
pub fn resolve(text: &str, mode: ResolveMode) -> Option<EquipmentCode> {
    match mode {
        ResolveMode::Exact => {
            let normalized = text.trim_matches(is_strip_char).to_uppercase();
            (!normalized.is_empty()).then_some(EquipmentCode(normalized))
        }
        ResolveMode::Search => code_regex()
            .find(&text.to_uppercase())
            .map(|m| EquipmentCode(m.as_str().to_string())),
    }
}

/// The category of canned response requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    TechnicalLookup,
    History,
    EmailVendor,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::TechnicalLookup, Intent::History, Intent::EmailVendor];

    /// Resolution strategy used by this intent
    pub fn mode(&self) -> ResolveMode {
        match self {
            Intent::TechnicalLookup | Intent::History => ResolveMode::Exact,
            Intent::EmailVendor => ResolveMode::Search,
        }
    }

    /// Codes this intent recognizes
    pub fn known_codes(&self) -> &'static [&'static str] {
        match self {
            Intent::TechnicalLookup => catalog::TECHNICAL_KNOWN,
            Intent::History => catalog::HISTORY_KNOWN,
            Intent::EmailVendor => catalog::EMAIL_KNOWN,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::TechnicalLookup => write!(f, "technical_lookup"),
            Intent::History => write!(f, "history"),
            Intent::EmailVendor => write!(f, "email_vendor"),
        }
    }
}

/// Answer `intent` for the raw `input` text
pub fn dispatch(intent: Intent, input: &str) -> String {
    let code = resolve(input, intent.mode());
    let known = code
        .as_ref()
        .filter(|c| c.is_in(intent.known_codes()));

    debug!(%intent, code = ?code, known = known.is_some(), "Dispatching equipment request");

    match (intent, known, code.as_ref()) {
        (Intent::TechnicalLookup, Some(code), _) => catalog::technical_details(code.as_str()),
        (Intent::TechnicalLookup, None, _) => catalog::technical_not_found(input),
        (Intent::History, Some(_), _) => catalog::HISTORY_EQ12345.to_string(),
        (Intent::History, None, _) => catalog::history_not_found(input),
        (Intent::EmailVendor, Some(code), _) => catalog::email_sent(code.as_str(), input),
        (Intent::EmailVendor, None, Some(code)) => catalog::email_unrecognized(code.as_str()),
        (Intent::EmailVendor, None, None) => catalog::EMAIL_NO_CODE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_resolution_normalizes() {
        for raw in ["eq12345", "EQ12345", " Eq12345 ", "\tEQ12345\n"] {
            assert_eq!(
                resolve(raw, ResolveMode::Exact).unwrap().as_str(),
                "EQ12345"
            );
        }
        assert!(resolve("   ", ResolveMode::Exact).is_none());
    }

    #[test]
    fn test_exact_resolution_strips_separators() {
        for raw in ["\u{1c}EQ12345", "EQ12345\u{1f}", "\u{85}eq12345\u{1d}\u{1e}"] {
            assert_eq!(
                resolve(raw, ResolveMode::Exact).unwrap().as_str(),
                "EQ12345"
            );
        }
        assert!(dispatch(Intent::TechnicalLookup, "\u{1c}EQ12345")
            .starts_with("Technical details for EQ12345"));
        assert!(resolve("\u{1c}\u{1f}", ResolveMode::Exact).is_none());
    }

    #[test]
    fn test_exact_resolution_keeps_whole_sentence() {
        let code = resolve("details for eq12345", ResolveMode::Exact).unwrap();
        assert_eq!(code.as_str(), "DETAILS FOR EQ12345");
        assert!(!code.is_in(catalog::TECHNICAL_KNOWN));
    }

    #[test]
    fn test_search_resolution() {
        let code = resolve("please email about eq67890 and EQ12345", ResolveMode::Search);
        assert_eq!(code.unwrap().as_str(), "EQ67890");

        assert!(resolve("hello vendor", ResolveMode::Search).is_none());
        assert!(resolve("EQ1234", ResolveMode::Search).is_none());
        assert!(resolve("EQ123456", ResolveMode::Search).is_none());
        assert!(resolve("XEQ12345", ResolveMode::Search).is_none());
    }

    #[test]
    fn test_technical_lookup() {
        assert_eq!(
            dispatch(Intent::TechnicalLookup, "EQ12345"),
            "Technical details for EQ12345: Model X, Power: 999 W, Dimensions: 50x50x50 cm."
        );
        assert!(dispatch(Intent::TechnicalLookup, " eq67890 ").contains("EQ67890"));
        assert_eq!(
            dispatch(Intent::TechnicalLookup, "eq11111 "),
            "No technical details found for eq11111 ."
        );
        assert_eq!(
            dispatch(Intent::TechnicalLookup, "specs for EQ12345"),
            "No technical details found for specs for EQ12345."
        );
    }

    #[test]
    fn test_history_lookup() {
        assert_eq!(
            dispatch(Intent::History, "eq12345"),
            "History for EQ12345: Purchased on 2023-01-15, Last serviced on 2024-06-10."
        );
        assert_eq!(
            dispatch(Intent::History, "eq67890"),
            "No history found for eq67890."
        );
    }

    #[test]
    fn test_email_known_code() {
        let input = "please send email for EQ12345 about calibration";
        let out = dispatch(Intent::EmailVendor, input);
        assert!(out.starts_with("Email sent to vendor regarding EQ12345.\n"));
        assert!(out.contains("regarding equipment EQ12345."));
        assert!(out.ends_with(&format!("Context: {input}")));
    }

    #[test]
    fn test_email_lowercase_code() {
        let out = dispatch(Intent::EmailVendor, "send to vendor for eq12345");
        assert!(out.starts_with("Email sent to vendor regarding EQ12345."));
    }

    #[test]
    fn test_email_unknown_code() {
        assert_eq!(
            dispatch(Intent::EmailVendor, "email the vendor about EQ99999"),
            "Failed to send email for EQ99999. Equipment not recognized in demo (only EQ12345 is enabled)."
        );
    }

    #[test]
    fn test_email_no_code() {
        assert_eq!(
            dispatch(Intent::EmailVendor, "hello vendor"),
            catalog::EMAIL_NO_CODE
        );
        assert_ne!(
            dispatch(Intent::EmailVendor, "hello vendor"),
            dispatch(Intent::EmailVendor, "EQ99999")
        );
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        for intent in Intent::ALL {
            for input in ["EQ12345", "eq67890", "hello", "mail EQ99999", ""] {
                assert_eq!(dispatch(intent, input), dispatch(intent, input));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            dispatch(Intent::TechnicalLookup, ""),
            "No technical details found for ."
        );
        assert_eq!(dispatch(Intent::EmailVendor, ""), catalog::EMAIL_NO_CODE);
    }
}
