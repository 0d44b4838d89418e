//! Features section

use super::common::{media, section_header, section_shell};
use super::{RenderContext, RenderedNode, el, placeholder};
use crate::core::spec::{
    FeatureItem, FeaturesLayout, FeaturesSection, Motion, SchemaEnum, SectionKind, SectionSpec,
};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Features(features) => render(features, cx),
        other => placeholder(other),
    }
}

pub fn render(section: &FeaturesSection, cx: &RenderContext) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Features, section.id.as_deref());
    let heading_id = format!("{prefix}-title");
    let motion = Motion::default();

    let items = (!section.items.is_empty()).then(|| {
        let list = el("ul")
            .class(format!("lp-features-items lp-layout-{}", section.layout.as_str()))
            .role("items")
            .children(section.items.iter().map(|item| feature_item(item, &motion, cx)));
        match section.layout {
            // Scrollable strip must be reachable by keyboard
            FeaturesLayout::Carousel => list
                .attr("tabindex", "0")
                .attr("aria-label", format!("{} carousel", section.headline)),
            FeaturesLayout::Grid | FeaturesLayout::List => list,
        }
    });

    section_shell("section", SectionKind::Features, section.id.as_deref(), &motion, cx)
        .attr("aria-labelledby", heading_id.clone())
        .child(section_header(
            &heading_id,
            &section.headline,
            section.subheadline.as_deref(),
        ))
        .maybe_child(items)
        .into()
}

fn feature_item(item: &FeatureItem, motion: &Motion, cx: &RenderContext) -> RenderedNode {
    el("li")
        .class("lp-feature")
        .role("item")
        .maybe_child(item.icon.as_ref().map(|icon| {
            el("span")
                .class("lp-icon")
                .role("icon")
                .attr("data-icon", icon.clone())
                .attr("aria-hidden", "true")
        }))
        .child(el("h3").role("item-title").text(item.title.clone()))
        .child(el("p").role("item-description").text(item.description.clone()))
        .maybe_child(item.media.as_ref().map(|m| media(m, None, motion, cx)))
        .into()
}
