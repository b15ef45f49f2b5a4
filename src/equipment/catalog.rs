//! Known equipment and canned responses
//!
//! Every literal the dispatchers can return lives here so that the
//! responses stay in one place and can be asserted on directly.

/// Codes the technical document lookup recognizes
pub const TECHNICAL_KNOWN: &[&str] = &["EQ12345", "EQ67890"];

/// Codes the history lookup recognizes
pub const HISTORY_KNOWN: &[&str] = &["EQ12345"];

/// Codes the vendor email tool is enabled for
pub const EMAIL_KNOWN: &[&str] = &["EQ12345"];

/// Pattern an equipment code must match when searched for in free text
pub const CODE_PATTERN: &str = r"\bEQ\d{5}\b";

/// Technical specification for a known code
pub fn technical_details(code: &str) -> String {
    format!("Technical details for {code}: Model X, Power: 999 W, Dimensions: 50x50x50 cm.")
}

/// Technical lookup miss, echoing the caller's untouched input
pub fn technical_not_found(input: &str) -> String {
    format!("No technical details found for {input}.")
}

/// Purchase and service history for EQ12345
pub const HISTORY_EQ12345: &str =
    "History for EQ12345: Purchased on 2023-01-15, Last serviced on 2024-06-10.";

/// History lookup miss, echoing the caller's untouched input
pub fn history_not_found(input: &str) -> String {
    format!("No history found for {input}.")
}

/// Simulated vendor email for a known code
pub fn email_sent(code: &str, input: &str) -> String {
    format!(
        "Email sent to vendor regarding {code}.\n\
         Body: Dear Vendor, we are reaching out regarding equipment {code}. \
         Context: {input}"
    )
}

/// A code was found in the text but email is not enabled for it
pub fn email_unrecognized(code: &str) -> String {
    format!(
        "Failed to send email for {code}. Equipment not recognized in demo (only EQ12345 is enabled)."
    )
}

/// No code-shaped substring in the text at all
pub const EMAIL_NO_CODE: &str =
    "Failed to send email. No valid equipment code found (expected pattern EQ#####).";
