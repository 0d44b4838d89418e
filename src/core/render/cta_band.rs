//! Full-width call-to-action band

use super::common::{action_link, section_shell};
use super::{RenderContext, RenderedNode, el, placeholder};
use crate::core::spec::{CtaBandSection, Motion, SchemaEnum, SectionKind, SectionSpec};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::CtaBand(band) => render(band, cx),
        other => placeholder(other),
    }
}

pub fn render(section: &CtaBandSection, cx: &RenderContext) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::CtaBand, section.id.as_deref());
    let heading_id = format!("{prefix}-title");
    let variant = section.cta.variant;

    section_shell(
        "section",
        SectionKind::CtaBand,
        section.id.as_deref(),
        &Motion::default(),
        cx,
    )
    .attr("aria-labelledby", heading_id.clone())
    .child(
        el("h2")
            .attr("id", heading_id)
            .role("heading")
            .text(section.heading.clone()),
    )
    .maybe_child(
        section
            .subcopy
            .as_ref()
            .map(|text| el("p").role("subcopy").text(text.clone())),
    )
    .child(
        action_link(
            &section.cta.action,
            &format!("lp-btn lp-btn-{}", variant.as_str()),
            None,
        )
        .attr("data-variant", variant.as_str())
        .role("cta"),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::test_section;
    use serde_json::json;

    fn band(value: serde_json::Value) -> CtaBandSection {
        match test_section(value) {
            SectionSpec::CtaBand(band) => band,
            other => panic!("expected cta band, got {other:?}"),
        }
    }

    #[test]
    fn test_default_variant_without_subcopy() {
        let node = render(
            &band(json!({
                "type": "cta-band",
                "heading": "Ready?",
                "cta": { "text": "Start", "href": "/start" },
            })),
            &RenderContext::default(),
        );
        assert!(node.find_role("subcopy").is_empty());
        let cta = node.find_role("cta")[0];
        assert_eq!(cta.get_attr("data-variant"), Some("primary"));
        assert_eq!(cta.get_attr("class"), Some("lp-btn lp-btn-primary"));
        assert!(!cta.has_attr("target"));
    }

    #[test]
    fn test_outline_external_cta() {
        let node = render(
            &band(json!({
                "type": "cta-band",
                "id": "cta",
                "heading": "Talk to us",
                "subcopy": "We reply fast.",
                "cta": {
                    "text": "Book a call",
                    "href": "https://cal.acme.test",
                    "variant": "outline",
                    "ariaLabel": "Book a sales call",
                },
            })),
            &RenderContext::default(),
        );
        assert_eq!(node.as_element().unwrap().get_attr("id"), Some("cta"));
        assert_eq!(node.find_role("subcopy")[0].text_content(), "We reply fast.");
        let cta = node.find_role("cta")[0];
        assert_eq!(cta.get_attr("data-variant"), Some("outline"));
        assert_eq!(cta.get_attr("aria-label"), Some("Book a sales call"));
        assert_eq!(cta.get_attr("rel"), Some("noopener noreferrer"));
    }
}
