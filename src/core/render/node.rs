//! Renderer output tree
//!
//! Renderers build a small markup tree instead of strings so the output can
//! be inspected structurally and serialized to HTML in exactly one place.

use std::fmt;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &["img", "input", "meta", "link", "br", "hr", "source"];

/// A rendered markup node
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    Element(Element),
    Text(String),
    /// Markup that is already safe to emit verbatim (JSON-LD payloads)
    Raw(String),
    /// Inert stand-in for a section that has no registered renderer
    Placeholder {
        section_type: String,
        section_id: Option<String>,
    },
}

/// An HTML element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<RenderedNode>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn maybe_attr<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute, emitted without a value when `on`
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append to the `class` attribute, creating it if needed
    pub fn add_class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(key, _)| *key == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attrs.push(("class", class.to_string())),
        }
        self
    }

    /// Semantic marker used by tests and event delegation
    pub fn role(self, value: &'static str) -> Self {
        self.attr("data-role", value)
    }

    pub fn child(mut self, node: impl Into<RenderedNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe_child<N: Into<RenderedNode>>(mut self, node: Option<N>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<N: Into<RenderedNode>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(RenderedNode::Text(text.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| *key == name)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(RenderedNode::text_content).collect()
    }
}

impl From<Element> for RenderedNode {
    fn from(element: Element) -> Self {
        RenderedNode::Element(element)
    }
}

impl RenderedNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderedNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderedNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderedNode::Placeholder { .. })
    }

    /// All elements in document order (self included) matching `predicate`
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_into(&predicate, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if let RenderedNode::Element(element) = self {
            if predicate(element) {
                out.push(element);
            }
            for child in &element.children {
                child.collect_into(predicate, out);
            }
        }
    }

    /// Elements carrying `data-role="<role>"`
    pub fn find_role(&self, role: &str) -> Vec<&Element> {
        self.find_all(|e| e.get_attr("data-role") == Some(role))
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.text_into(&mut out);
        out
    }

    fn text_into(&self, out: &mut String) {
        match self {
            RenderedNode::Text(text) => out.push_str(text),
            RenderedNode::Element(element) => {
                for child in &element.children {
                    child.text_into(out);
                }
            }
            RenderedNode::Raw(_) | RenderedNode::Placeholder { .. } => {}
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            RenderedNode::Text(text) => out.push_str(&escape_text(text)),
            RenderedNode::Raw(raw) => out.push_str(raw),
            RenderedNode::Placeholder {
                section_type,
                section_id,
            } => {
                out.push_str("<div hidden aria-hidden=\"true\" data-placeholder=\"");
                out.push_str(&escape_attr(section_type));
                out.push('"');
                if let Some(id) = section_id {
                    out.push_str(" data-section-id=\"");
                    out.push_str(&escape_attr(id));
                    out.push('"');
                }
                out.push_str("></div>");
            }
            RenderedNode::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for RenderedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let node: RenderedNode = el("a")
            .attr("href", "/x?a=1&b=2")
            .class("btn")
            .text("Go <now>")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<a href="/x?a=1&amp;b=2" class="btn">Go &lt;now&gt;</a>"#
        );
    }

    #[test]
    fn test_void_and_flag_attributes() {
        let node: RenderedNode = el("input").attr("type", "email").flag("required", true).into();
        assert_eq!(node.to_html(), r#"<input type="email" required>"#);

        let node: RenderedNode = el("input").flag("required", false).into();
        assert_eq!(node.to_html(), "<input>");
    }

    #[test]
    fn test_attribute_quotes_escaped() {
        let node: RenderedNode = el("div").attr("title", r#"say "hi""#).into();
        assert_eq!(node.to_html(), r#"<div title="say &quot;hi&quot;"></div>"#);
    }

    #[test]
    fn test_optional_children_skipped() {
        let node: RenderedNode = el("div")
            .maybe_child(None::<Element>)
            .maybe_attr("id", None::<String>)
            .into();
        assert_eq!(node.to_html(), "<div></div>");
    }

    #[test]
    fn test_placeholder_is_inert() {
        let node = RenderedNode::Placeholder {
            section_type: "gallery".to_string(),
            section_id: Some("shots".to_string()),
        };
        assert!(node.is_placeholder());
        assert_eq!(
            node.to_html(),
            r#"<div hidden aria-hidden="true" data-placeholder="gallery" data-section-id="shots"></div>"#
        );
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn test_find_role_and_text() {
        let node: RenderedNode = el("section")
            .child(el("h2").role("headline").text("Hello"))
            .child(el("p").role("body").text(" world"))
            .into();
        assert_eq!(node.find_role("headline").len(), 1);
        assert!(node.find_role("missing").is_empty());
        assert_eq!(node.text_content(), "Hello world");
    }
}
