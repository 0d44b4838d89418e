//! Testimonials section: grid, list or carousel

use super::common::{section_header, section_shell};
use super::{Element, RenderContext, RenderedNode, el, placeholder};
use crate::core::interaction::CarouselState;
use crate::core::spec::{
    Motion, SchemaEnum, SectionKind, SectionSpec, Testimonial, TestimonialsLayout,
    TestimonialsSection,
};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Testimonials(testimonials) => render(testimonials, cx),
        other => placeholder(other),
    }
}

/// Initial carousel state for a section
pub fn initial_state(section: &TestimonialsSection) -> CarouselState {
    CarouselState::new(section.items.len(), section.autoplay)
}

pub fn render(section: &TestimonialsSection, cx: &RenderContext) -> RenderedNode {
    render_with(section, cx, &initial_state(section), 0)
}

/// Render with live carousel state. `now` is only consulted to decide
/// whether the carousel is currently auto-rotating.
pub fn render_with(
    section: &TestimonialsSection,
    cx: &RenderContext,
    carousel: &CarouselState,
    now: u64,
) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Testimonials, section.id.as_deref());
    let heading_id = format!("{prefix}-title");

    let body = if section.items.is_empty() {
        None
    } else if section.layout == TestimonialsLayout::Carousel {
        Some(carousel_view(section, &prefix, carousel, now, cx))
    } else {
        Some(
            el("div")
                .class(format!("lp-testimonials-items lp-layout-{}", section.layout.as_str()))
                .role("items")
                .children(section.items.iter().map(testimonial)),
        )
    };

    section_shell(
        "section",
        SectionKind::Testimonials,
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
    .maybe_child(body)
    .into()
}

fn carousel_view(
    section: &TestimonialsSection,
    prefix: &str,
    carousel: &CarouselState,
    now: u64,
    cx: &RenderContext,
) -> Element {
    let len = section.items.len();
    let current = carousel.index().min(len - 1);
    // Rotation is announced only when it is not moving on its own
    let rotating = carousel.is_rotating(now) && !cx.reduced_motion();

    let slides = section.items.iter().enumerate().map(|(i, item)| {
        let slide = el("div")
            .class("lp-slide")
            .attr("role", "group")
            .attr("aria-roledescription", "slide")
            .attr("aria-label", format!("{} of {}", i + 1, len))
            .role("slide")
            .flag("hidden", i != current)
            .maybe_attr("aria-current", (i == current).then_some("true"));
        slide.child(testimonial(item))
    });

    let control = |action: &'static str, label: &'static str, glyph: &'static str| {
        el("button")
            .attr("type", "button")
            .class("lp-carousel-control")
            .attr("data-action", action)
            .attr("aria-controls", format!("{prefix}-slides"))
            .attr("aria-label", label)
            .child(el("span").attr("aria-hidden", "true").text(glyph))
    };

    let autoplay_toggle = carousel.has_autoplay().then(|| {
        let stopped = carousel.is_stopped();
        el("button")
            .attr("type", "button")
            .class("lp-carousel-control")
            .attr("data-action", "carousel-toggle-autoplay")
            .attr(
                "aria-label",
                if stopped {
                    "Start automatic rotation"
                } else {
                    "Stop automatic rotation"
                },
            )
            .attr("aria-pressed", if stopped { "true" } else { "false" })
            .role("autoplay-toggle")
            .text(if stopped { "Play" } else { "Pause" })
    });

    el("div")
        .class("lp-carousel")
        .attr("role", "region")
        .attr("aria-roledescription", "carousel")
        .attr("aria-label", section.headline.clone())
        .attr("tabindex", "0")
        .role("carousel")
        .child(
            el("div")
                .class("lp-carousel-controls")
                .maybe_child(autoplay_toggle)
                .child(control("carousel-prev", "Previous testimonial", "‹"))
                .child(control("carousel-next", "Next testimonial", "›")),
        )
        .child(
            el("div")
                .class("lp-slides")
                .attr("id", format!("{prefix}-slides"))
                .attr("aria-live", if rotating { "off" } else { "polite" })
                .children(slides),
        )
        .child(
            el("p")
                .class("lp-sr-only")
                .attr("aria-live", "polite")
                .attr("aria-atomic", "true")
                .role("carousel-status")
                .text(carousel.position_label()),
        )
}

fn testimonial(item: &Testimonial) -> Element {
    let byline = match (&item.role, &item.company) {
        (Some(role), Some(company)) => Some(format!("{role}, {company}")),
        (Some(single), None) | (None, Some(single)) => Some(single.clone()),
        (None, None) => None,
    };

    let rating = item.rating.map(|stars| {
        let stars = usize::from(stars.min(5));
        el("p")
            .class("lp-rating")
            .attr("role", "img")
            .attr("aria-label", format!("{stars} out of 5 stars"))
            .role("rating")
            .text(format!("{}{}", "★".repeat(stars), "☆".repeat(5 - stars)))
    });

    el("figure")
        .class("lp-testimonial")
        .role("testimonial")
        .maybe_child(rating)
        .child(el("blockquote").role("quote").child(el("p").text(item.quote.clone())))
        .child(
            el("figcaption")
                .maybe_child(item.avatar.as_ref().map(|src| {
                    el("img")
                        .attr("src", src.clone())
                        .attr("alt", "")
                        .attr("loading", "lazy")
                        .attr("decoding", "async")
                        .role("avatar")
                }))
                .child(el("cite").role("author").text(item.author.clone()))
                .maybe_child(byline.map(|text| el("span").role("byline").text(text))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::test_section;
    use serde_json::json;

    fn section(layout: &str, items: usize, autoplay: bool) -> TestimonialsSection {
        let items: Vec<_> = (0..items)
            .map(|i| json!({ "quote": format!("Quote {i}"), "author": format!("Author {i}") }))
            .collect();
        let mut value = json!({
            "type": "testimonials",
            "headline": "Loved by teams",
            "layout": layout,
            "items": items,
        });
        if autoplay {
            value["autoplay"] = json!({ "interval": 4000 });
        }
        match test_section(value) {
            SectionSpec::Testimonials(section) => section,
            other => panic!("expected testimonials, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_renders_all_items_without_controls() {
        let node = render(&section("grid", 3, false), &RenderContext::default());
        assert_eq!(node.find_role("testimonial").len(), 3);
        assert!(node.find_role("carousel").is_empty());
        assert!(node.find_all(|e| e.has_attr("data-action")).is_empty());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let node = render(&section("list", 1, false), &RenderContext::default());
        assert!(node.find_role("rating").is_empty());
        assert!(node.find_role("avatar").is_empty());
        assert!(node.find_role("byline").is_empty());
        assert_eq!(node.find_role("author")[0].text_content(), "Author 0");
    }

    #[test]
    fn test_rating_and_byline() {
        let value = json!({
            "type": "testimonials",
            "headline": "H",
            "items": [{
                "quote": "Q", "author": "Ada", "role": "CTO", "company": "Acme",
                "avatar": "/ada.png", "rating": 4,
            }],
        });
        let SectionSpec::Testimonials(section) = test_section(value) else {
            panic!("expected testimonials");
        };
        let node = render(&section, &RenderContext::default());
        let rating = node.find_role("rating");
        assert_eq!(rating[0].get_attr("aria-label"), Some("4 out of 5 stars"));
        assert_eq!(rating[0].text_content(), "★★★★☆");
        assert_eq!(node.find_role("byline")[0].text_content(), "CTO, Acme");
        assert_eq!(node.find_role("avatar")[0].get_attr("loading"), Some("lazy"));
    }

    #[test]
    fn test_carousel_shows_current_slide_and_announces_position() {
        let section = section("carousel", 3, false);
        let mut state = initial_state(&section);
        state.next(0);
        let node = render_with(&section, &RenderContext::default(), &state, 0);

        let slides = node.find_role("slide");
        assert_eq!(slides.len(), 3);
        let visible: Vec<_> = slides.iter().map(|s| !s.has_attr("hidden")).collect();
        assert_eq!(visible, vec![false, true, false]);

        let status = node.find_role("carousel-status");
        assert_eq!(status[0].get_attr("aria-live"), Some("polite"));
        assert_eq!(status[0].text_content(), "Testimonial 2 of 3");

        for control in node.find_all(|e| e.tag == "button") {
            assert!(control.has_attr("aria-label"));
        }
        assert!(node.find_role("autoplay-toggle").is_empty());
    }

    #[test]
    fn test_autoplay_carousel_silences_slide_region_while_rotating() {
        let section = section("carousel", 2, true);
        let state = initial_state(&section);
        let node = render_with(&section, &RenderContext::default(), &state, 0);
        assert_eq!(node.find_role("autoplay-toggle").len(), 1);
        let region = node.find_all(|e| e.get_attr("class") == Some("lp-slides"));
        assert_eq!(region[0].get_attr("aria-live"), Some("off"));
    }

    #[test]
    fn test_empty_carousel_has_no_controls() {
        let node = render(&section("carousel", 0, true), &RenderContext::default());
        assert!(node.find_role("carousel").is_empty());
        assert_eq!(node.find_role("headline").len(), 1);
    }
}
