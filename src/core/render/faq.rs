//! FAQ section

use serde_json::Value;

use super::common::{section_header, section_shell};
use super::{Element, RenderContext, RenderedNode, el, placeholder};
use crate::core::interaction::AccordionState;
use crate::core::spec::{FaqItem, FaqLayout, FaqSection, Motion, SectionKind, SectionSpec};
use crate::core::structured_data::{faq_page, json_ld_script};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Faq(faq) => render(faq, cx),
        other => placeholder(other),
    }
}

pub fn initial_state(section: &FaqSection) -> AccordionState {
    AccordionState::new(section.allow_multiple_open)
}

/// `FAQPage` JSON-LD when the section asks for it
pub fn structured_data(section: &FaqSection) -> Option<Value> {
    section.structured_data.then(|| faq_page(&section.items))
}

pub fn render(section: &FaqSection, cx: &RenderContext) -> RenderedNode {
    render_with(section, cx, &initial_state(section))
}

pub fn render_with(
    section: &FaqSection,
    cx: &RenderContext,
    accordion: &AccordionState,
) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Faq, section.id.as_deref());
    let heading_id = format!("{prefix}-title");

    let items = (!section.items.is_empty()).then(|| {
        let list = el("div")
            .class(match section.layout {
                FaqLayout::Accordion => "lp-faq-items lp-layout-accordion",
                FaqLayout::Grid => "lp-faq-items lp-layout-grid",
            })
            .role("items");
        let items = section.items.iter().enumerate();
        match section.layout {
            FaqLayout::Accordion => list.children(
                items.map(|(i, item)| accordion_item(item, i, &prefix, accordion.is_open(i))),
            ),
            FaqLayout::Grid => list.children(items.map(|(_, item)| grid_item(item))),
        }
    });

    section_shell(
        "section",
        SectionKind::Faq,
        section.id.as_deref(),
        &Motion::default(),
        cx,
    )
    .attr("aria-labelledby", heading_id.clone())
    .child(section_header(
        &heading_id,
        &section.headline,
        section.subheadline.as_deref(),
    ))
    .maybe_child(items)
    .maybe_child(structured_data(section).map(|value| json_ld_script(&value)))
    .into()
}

fn category(item: &FaqItem) -> Option<Element> {
    item.category
        .as_ref()
        .map(|text| el("span").class("lp-faq-category").role("category").text(text.clone()))
}

fn accordion_item(item: &FaqItem, index: usize, prefix: &str, open: bool) -> Element {
    let trigger_id = format!("{prefix}-q-{index}");
    let panel_id = format!("{prefix}-a-{index}");

    el("div")
        .class(if open { "lp-faq-item lp-open" } else { "lp-faq-item" })
        .role("faq-item")
        .maybe_child(category(item))
        .child(
            el("h3").child(
                el("button")
                    .attr("type", "button")
                    .attr("id", trigger_id.clone())
                    .attr("aria-expanded", if open { "true" } else { "false" })
                    .attr("aria-controls", panel_id.clone())
                    .attr("aria-label", item.question.clone())
                    .attr("data-action", "faq-toggle")
                    .attr("data-index", index.to_string())
                    .role("faq-trigger")
                    .text(item.question.clone()),
            ),
        )
        .child(
            el("div")
                .attr("id", panel_id)
                .attr("role", "region")
                .attr("aria-labelledby", trigger_id)
                .flag("hidden", !open)
                .role("faq-answer")
                .child(el("p").text(item.answer.clone())),
        )
}

fn grid_item(item: &FaqItem) -> Element {
    el("div")
        .class("lp-faq-item")
        .role("faq-item")
        .maybe_child(category(item))
        .child(el("h3").role("faq-question").text(item.question.clone()))
        .child(el("p").role("faq-answer").text(item.answer.clone()))
}
