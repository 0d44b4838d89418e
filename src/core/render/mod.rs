//! Section rendering
//!
//! Renderers are pure functions from a typed section plus an explicit
//! [`RenderContext`] to a [`RenderedNode`]. The registry maps every section
//! kind to its renderer; kinds without one degrade to an inert placeholder.

mod common;
pub mod cta_band;
pub mod document;
pub mod faq;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
mod node;
pub mod pricing;
mod registry;
pub mod testimonials;

use serde_json::Value;

use crate::core::head::HeadMetadata;
use crate::core::spec::{PageSpec, SectionKind, SectionSpec};
use crate::core::theme::ThemeTokens;

pub use common::{INERT_HREF, is_safe_href};
pub use node::{Element, RenderedNode, el, escape_attr, escape_text};
pub use registry::{Renderer, is_registered, lookup, placeholder, render_section};

/// Facts about the viewing environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderEnv {
    pub prefers_reduced_motion: bool,
}

/// Everything a renderer may read besides its own section
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderContext {
    pub env: RenderEnv,
    pub theme: ThemeTokens,
    /// Index of the section in the page, used to build unique element ids
    pub position: Option<usize>,
}

impl RenderContext {
    pub fn new(env: RenderEnv, theme: ThemeTokens) -> Self {
        Self {
            env,
            theme,
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn reduced_motion(&self) -> bool {
        self.env.prefers_reduced_motion
    }

    /// Prefix for element ids inside one section
    pub fn id_prefix(&self, kind: SectionKind, section_id: Option<&str>) -> String {
        match (section_id, self.position) {
            (Some(id), _) => id.to_string(),
            (None, Some(position)) => format!("lp-{kind}-{position}"),
            (None, None) => format!("lp-{kind}"),
        }
    }
}

/// A fully rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// One node per section, in input order
    pub nodes: Vec<RenderedNode>,
    pub theme: ThemeTokens,
    pub head: HeadMetadata,
    /// JSON-LD documents emitted by sections, in document order
    pub structured_data: Vec<Value>,
}

/// Render every section in order. Never fails: sections without a renderer
/// become placeholders.
pub fn render_page(spec: &PageSpec, env: &RenderEnv) -> RenderedPage {
    let theme = ThemeTokens::resolve(spec);
    let base = RenderContext::new(*env, theme.clone());

    let nodes = spec
        .sections
        .iter()
        .enumerate()
        .map(|(position, section)| render_section(section, &base.clone().at(position)))
        .collect();

    let structured_data = spec
        .sections
        .iter()
        .filter_map(|section| match section {
            SectionSpec::Faq(faq) => faq::structured_data(faq),
            _ => None,
        })
        .collect();

    RenderedPage {
        nodes,
        theme,
        head: HeadMetadata::from_meta(&spec.meta),
        structured_data,
    }
}

/// Validate a single section fixture
#[cfg(test)]
pub(crate) fn test_section(value: Value) -> SectionSpec {
    crate::core::spec::validate_section_value(&value, crate::core::spec::FieldPath::root())
        .expect("valid section fixture")
}
