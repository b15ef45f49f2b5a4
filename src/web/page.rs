//! HTML rendering for the question form

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

/// Embedded form template
const INDEX_TEMPLATE: &str = include_str!("../../static/index.hbs");

/// Page title shown in the browser and the heading
pub const PAGE_TITLE: &str = "Chatbot with Ollama and Tools";

/// Values interpolated into the form page; all are HTML-escaped
#[derive(Debug, Default, Serialize)]
pub struct PageContext<'a> {
    pub question: &'a str,
    pub response: Option<&'a str>,
    pub error: Option<&'a str>,
    pub model: &'a str,
}

#[derive(Serialize)]
struct RenderContext<'a> {
    title: &'static str,
    version: &'static str,
    /// An empty answer still renders its block
    has_response: bool,
    #[serde(flatten)]
    page: &'a PageContext<'a>,
}

/// Compiled form page
pub struct Page {
    registry: Handlebars<'static>,
}

impl Page {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string("index", INDEX_TEMPLATE)?;
        Ok(Page { registry })
    }

    pub fn render(&self, page: &PageContext<'_>) -> Result<String> {
        let ctx = RenderContext {
            title: PAGE_TITLE,
            version: crate::VERSION,
            has_response: page.response.is_some(),
            page,
        };
        Ok(self.registry.render("index", &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let page = Page::new().unwrap();
        let html = page
            .render(&PageContext {
                model: "llama3.2:3b",
                ..Default::default()
            })
            .unwrap();
        assert!(html.contains("<title>Chatbot with Ollama and Tools</title>"));
        assert!(html.contains(r#"name="question""#));
        assert!(!html.contains("Response:"));
        assert!(html.contains("Model: llama3.2:3b"));
    }

    #[test]
    fn test_response_is_escaped() {
        let page = Page::new().unwrap();
        let html = page
            .render(&PageContext {
                question: "<script>alert(1)</script>",
                response: Some("Body: <b>EQ12345</b>"),
                error: None,
                model: "m",
            })
            .unwrap();
        assert!(html.contains("<strong>Response:</strong> Body: &lt;b&gt;EQ12345&lt;/b&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_empty_response_is_shown() {
        let page = Page::new().unwrap();
        let html = page
            .render(&PageContext {
                question: "History EQ12345",
                response: Some(""),
                model: "m",
                ..Default::default()
            })
            .unwrap();
        assert!(html.contains("<strong>Response:</strong>"));
        assert!(!html.contains(r#"class="error""#));
    }
}
