//! Standalone HTML export

use super::{RenderedPage, escape_attr, escape_text};
use crate::core::loader::LoadError;

/// Stylesheet emitted by the Leptos build
pub const STYLESHEET_HREF: &str = "/pkg/pagewright.css";

const DOCUMENT_START: &str = "<!DOCTYPE html><html lang=\"en\"><head>\
    <meta charset=\"utf-8\">\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">";

/// Full document: head metadata, stylesheet, theme variables and sections
pub fn render_document(page: &RenderedPage) -> String {
    let mut html = String::from(DOCUMENT_START);
    for node in page.head.to_nodes() {
        node.write_html(&mut html);
    }
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">"));
    html.push_str("</head><body>");

    html.push_str("<main class=\"lp-page\"");
    if let Some(style) = page.theme.to_style() {
        html.push_str(&format!(" style=\"{}\"", escape_attr(&style)));
    }
    html.push('>');
    for node in &page.nodes {
        node.write_html(&mut html);
    }
    html.push_str("</main></body></html>");
    html
}

/// Error page for a spec that could not be loaded
pub fn render_error_document(error: &LoadError) -> String {
    let mut html = String::from(DOCUMENT_START);
    html.push_str("<title>Page spec error</title>");
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">"));
    html.push_str("</head><body><main class=\"lp-error-state\" role=\"alert\">");
    html.push_str(&format!(
        "<h1>{}</h1><p class=\"lp-error-message\">{}</p><p>{}</p>",
        escape_text(error.title()),
        escape_text(&error.to_string()),
        escape_text(error.guidance()),
    ));
    html.push_str("</main></body></html>");
    html
}
