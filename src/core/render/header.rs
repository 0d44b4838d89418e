//! Site header with brand, navigation and optional call to action

use super::common::{action_link, link, nav_link, section_shell};
use super::{Element, RenderContext, RenderedNode, el, placeholder};
use crate::core::interaction::HeaderState;
use crate::core::spec::{Brand, HeaderSection, Motion, SectionKind, SectionSpec};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Header(header) => render(header, cx),
        other => placeholder(other),
    }
}

pub fn render(section: &HeaderSection, cx: &RenderContext) -> RenderedNode {
    render_with(section, cx, &HeaderState::default())
}

pub fn render_with(section: &HeaderSection, cx: &RenderContext, state: &HeaderState) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Header, section.id.as_deref());
    let nav_id = format!("{prefix}-nav");
    let transparent = section.transparent_until_scroll && !state.scrolled;

    let mut classes = vec!["lp-site-header"];
    if section.sticky {
        classes.push("lp-sticky");
    }
    if transparent {
        classes.push("lp-transparent");
    }
    if state.menu_open {
        classes.push("lp-menu-open");
    }

    let nav = (!section.nav.is_empty()).then(|| {
        el("nav")
            .attr("id", nav_id.clone())
            .attr("aria-label", "Main")
            .role("nav")
            .child(
                el("ul").children(
                    section
                        .nav
                        .iter()
                        .map(|item| el("li").child(nav_link(item))),
                ),
            )
    });

    let menu_toggle = nav.as_ref().map(|_| {
        el("button")
            .attr("type", "button")
            .class("lp-menu-toggle")
            .attr("aria-expanded", if state.menu_open { "true" } else { "false" })
            .attr("aria-controls", nav_id.clone())
            .attr(
                "aria-label",
                if state.menu_open {
                    "Close navigation menu"
                } else {
                    "Open navigation menu"
                },
            )
            .attr("data-action", "nav-toggle")
            .role("menu-toggle")
            .child(el("span").attr("aria-hidden", "true").text("☰"))
    });

    section_shell(
        "header",
        SectionKind::Header,
        section.id.as_deref(),
        &Motion::default(),
        cx,
    )
    .add_class(&classes.join(" "))
    .maybe_attr("data-sticky", section.sticky.then_some("true"))
    .maybe_attr(
        "data-transparent-until-scroll",
        section.transparent_until_scroll.then_some("true"),
    )
    .maybe_child(section.brand.as_ref().map(brand))
    .maybe_child(menu_toggle)
    .maybe_child(nav)
    .maybe_child(
        section
            .cta
            .as_ref()
            .map(|action| action_link(action, "lp-btn lp-btn-primary", None).role("header-cta")),
    )
    .into()
}

fn brand(brand: &Brand) -> Element {
    link(&brand.href)
        .class("lp-brand")
        .attr("aria-label", format!("{} home", brand.label))
        .role("brand")
        .maybe_child(brand.logo.as_ref().map(|src| {
            el("img")
                .attr("src", src.clone())
                .attr("alt", "")
                .attr("loading", "eager")
        }))
        .child(el("span").text(brand.label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::test_section;
    use serde_json::json;

    fn header(value: serde_json::Value) -> HeaderSection {
        match test_section(value) {
            SectionSpec::Header(header) => header,
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_header() {
        let node = render(&header(json!({ "type": "header" })), &RenderContext::default());
        let root = node.as_element().unwrap();
        assert_eq!(root.tag, "header");
        assert!(root.children.is_empty());
        assert!(!root.has_attr("data-sticky"));
    }

    #[test]
    fn test_brand_nav_and_cta() {
        let section = header(json!({
            "type": "header",
            "brand": { "label": "Acme" },
            "nav": [{ "label": "Pricing", "href": "#pricing" }],
            "cta": { "text": "Sign up", "href": "/signup" },
            "sticky": true,
        }));
        let node = render(&section, &RenderContext::default().at(0));
        let brand = node.find_role("brand")[0];
        assert_eq!(brand.get_attr("href"), Some("/"));
        assert_eq!(brand.get_attr("aria-label"), Some("Acme home"));

        let toggle = node.find_role("menu-toggle")[0];
        assert_eq!(toggle.get_attr("aria-controls"), Some("lp-header-0-nav"));
        assert_eq!(toggle.get_attr("aria-expanded"), Some("false"));

        assert_eq!(node.find_role("header-cta")[0].get_attr("href"), Some("/signup"));
        let class = node.as_element().unwrap().get_attr("class").unwrap();
        assert!(class.contains("lp-sticky"));
        assert!(class.starts_with("lp-section lp-header"));
    }

    #[test]
    fn test_transparency_follows_scroll() {
        let section = header(json!({ "type": "header", "transparentUntilScroll": true }));
        let mut state = HeaderState::default();
        let top = render_with(&section, &RenderContext::default(), &state);
        assert!(top.as_element().unwrap().get_attr("class").unwrap().contains("lp-transparent"));

        state.on_scroll(300.0);
        let scrolled = render_with(&section, &RenderContext::default(), &state);
        assert!(!scrolled.as_element().unwrap().get_attr("class").unwrap().contains("lp-transparent"));
    }

    #[test]
    fn test_open_menu() {
        let section = header(json!({
            "type": "header",
            "nav": [{ "label": "Docs", "href": "/docs" }],
        }));
        let state = HeaderState {
            menu_open: true,
            scrolled: false,
        };
        let node = render_with(&section, &RenderContext::default(), &state);
        let toggle = node.find_role("menu-toggle")[0];
        assert_eq!(toggle.get_attr("aria-expanded"), Some("true"));
        assert_eq!(toggle.get_attr("aria-label"), Some("Close navigation menu"));
    }
}
