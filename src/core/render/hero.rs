//! Hero section

use super::common::{action_link, media, section_shell};
use super::{RenderContext, RenderedNode, el, placeholder};
use crate::core::spec::{HeroSection, SectionKind, SectionSpec};
use crate::core::theme::ThemeTokens;

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Hero(hero) => render(hero, cx),
        other => placeholder(other),
    }
}

pub fn render(hero: &HeroSection, cx: &RenderContext) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Hero, hero.id.as_deref());
    let heading_id = format!("{prefix}-title");
    let labels = &hero.aria_labels;

    let shell = section_shell("section", SectionKind::Hero, hero.id.as_deref(), &hero.motion, cx);
    // Section-local overrides apply on top of the page theme
    let shell = shell.maybe_attr(
        "style",
        hero.theme
            .as_ref()
            .and_then(|overrides| ThemeTokens::from_overrides(overrides).to_style()),
    );
    let shell = match &labels.section {
        Some(label) => shell.attr("aria-label", label.clone()),
        None => shell.attr("aria-labelledby", heading_id.clone()),
    };

    let actions = el("div")
        .class("lp-actions")
        .role("actions")
        .child(
            action_link(&hero.cta.primary, "lp-btn lp-btn-primary", labels.primary_cta.as_deref())
                .role("primary-cta"),
        )
        .maybe_child(hero.cta.secondary.as_ref().map(|secondary| {
            action_link(secondary, "lp-btn lp-btn-secondary", labels.secondary_cta.as_deref())
                .role("secondary-cta")
        }));

    let content = el("div")
        .class("lp-hero-content")
        .child(
            el("h1")
                .attr("id", heading_id)
                .role("headline")
                .maybe_attr("aria-label", labels.headline.clone())
                .text(hero.headline.clone()),
        )
        .maybe_child(
            hero.subheadline
                .as_ref()
                .map(|text| el("p").role("subheadline").text(text.clone())),
        )
        .child(actions);

    let media_node = hero.media.as_ref().map(|m| {
        el("div")
            .class("lp-hero-media")
            .child(media(m, labels.media.as_deref(), &hero.motion, cx))
    });

    shell.child(content).maybe_child(media_node).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{RenderEnv, test_section};
    use serde_json::json;

    fn hero(value: serde_json::Value) -> HeroSection {
        match test_section(value) {
            SectionSpec::Hero(hero) => hero,
            other => panic!("expected hero, got {other:?}"),
        }
    }

    fn minimal() -> HeroSection {
        hero(json!({
            "type": "hero",
            "headline": "H",
            "cta": { "primary": { "text": "Go", "href": "/x" } },
        }))
    }

    #[test]
    fn test_minimal_hero() {
        let node = render(&minimal(), &RenderContext::default());
        let headline = node.find_role("headline");
        assert_eq!(headline.len(), 1);
        assert_eq!(headline[0].tag, "h1");

        let primary = node.find_role("primary-cta");
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].get_attr("href"), Some("/x"));
        assert_eq!(primary[0].get_attr("aria-label"), Some("Go"));

        assert!(node.find_role("secondary-cta").is_empty());
        assert!(node.find_role("subheadline").is_empty());
        assert!(node.find_role("media").is_empty());
        assert!(!node.to_html().contains("lp-hero-media"));
        assert!(!node.as_element().unwrap().has_attr("style"));
    }

    #[test]
    fn test_full_hero() {
        let hero = hero(json!({
            "type": "hero",
            "id": "top",
            "headline": "Ship faster",
            "subheadline": "Sub",
            "cta": {
                "primary": { "text": "Start", "href": "/start" },
                "secondary": { "text": "Docs", "href": "https://docs.acme.test" },
            },
            "media": { "type": "image", "src": "/hero.png", "alt": "Screenshot", "parallaxSpeed": 1.5 },
            "ariaLabels": { "section": "Introduction", "primaryCta": "Start your trial" },
            "motion": { "entrance": "scale" },
            "theme": { "primary": "#ff0000" },
        }));
        let node = render(&hero, &RenderContext::default());
        let root = node.as_element().unwrap();
        assert_eq!(root.get_attr("id"), Some("top"));
        assert_eq!(root.get_attr("aria-label"), Some("Introduction"));
        assert_eq!(root.get_attr("data-motion"), Some("scale"));
        assert_eq!(root.get_attr("style"), Some("--lp-color-primary: #ff0000;"));

        assert_eq!(
            node.find_role("primary-cta")[0].get_attr("aria-label"),
            Some("Start your trial")
        );
        let secondary = node.find_role("secondary-cta");
        assert_eq!(secondary[0].get_attr("target"), Some("_blank"));
        assert_eq!(secondary[0].get_attr("rel"), Some("noopener noreferrer"));

        let media = node.find_role("media");
        assert_eq!(media[0].get_attr("data-parallax-speed"), Some("1.5"));
    }

    #[test]
    fn test_reduced_motion_hero() {
        let cx = RenderContext {
            env: RenderEnv {
                prefers_reduced_motion: true,
            },
            ..Default::default()
        };
        let node = render(&minimal(), &cx);
        assert_eq!(node.as_element().unwrap().get_attr("data-motion"), Some("none"));
    }

    #[test]
    fn test_heading_ids_unique_per_position() {
        let first = render(&minimal(), &RenderContext::default().at(0));
        let second = render(&minimal(), &RenderContext::default().at(3));
        assert_eq!(first.find_role("headline")[0].get_attr("id"), Some("lp-hero-0-title"));
        assert_eq!(second.find_role("headline")[0].get_attr("id"), Some("lp-hero-3-title"));
    }
}
