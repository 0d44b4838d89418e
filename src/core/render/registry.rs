//! Static section registry

use super::{RenderContext, RenderedNode};
use crate::core::spec::{SchemaEnum, SectionKind, SectionSpec};

/// Section renderer entry point
pub type Renderer = fn(&SectionSpec, &RenderContext) -> RenderedNode;

/// Closed dispatch table. `gallery` is recognized by the schema but has no
/// entry, so it always renders as a placeholder.
static REGISTRY: &[(SectionKind, Renderer)] = &[
    (SectionKind::Hero, super::hero::render_section),
    (SectionKind::Features, super::features::render_section),
    (SectionKind::Pricing, super::pricing::render_section),
    (SectionKind::Testimonials, super::testimonials::render_section),
    (SectionKind::Faq, super::faq::render_section),
    (SectionKind::Footer, super::footer::render_section),
    (SectionKind::Header, super::header::render_section),
    (SectionKind::CtaBand, super::cta_band::render_section),
];

/// Renderer registered for a discriminator tag
pub fn lookup(tag: &str) -> Option<Renderer> {
    SectionKind::from_tag(tag).and_then(renderer_for)
}

pub fn is_registered(kind: SectionKind) -> bool {
    renderer_for(kind).is_some()
}

fn renderer_for(kind: SectionKind) -> Option<Renderer> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == kind)
        .map(|(_, renderer)| *renderer)
}

/// Dispatch one section
pub fn render_section(spec: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match renderer_for(spec.kind()) {
        Some(renderer) => renderer(spec, cx),
        None => placeholder(spec),
    }
}

/// Inert stand-in for an unrenderable section
pub fn placeholder(spec: &SectionSpec) -> RenderedNode {
    RenderedNode::Placeholder {
        section_type: spec.kind().as_str().to_string(),
        section_id: spec.id().map(str::to_string),
    }
}
