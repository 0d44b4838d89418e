//! Building blocks shared by the section renderers

use super::{Element, RenderContext, el};
use crate::core::motion::{allows_ambient_motion, effective_entrance, entrance_class};
use crate::core::spec::{Action, Media, MediaType, Motion, NavLink, SchemaEnum, SectionKind};

/// Absolute http(s) or protocol-relative URL
pub fn is_external(href: &str) -> bool {
    let lowered = href.trim_start().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://") || lowered.starts_with("//")
}

/// Schemes a spec may link to; anything else is replaced by [`INERT_HREF`]
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Stand-in for rejected link targets
pub const INERT_HREF: &str = "#";

/// Relative paths, fragments, protocol-relative URLs and the schemes in
/// [`SAFE_SCHEMES`]. Browsers drop tabs and newlines inside a URL and
/// leading control characters, so the scheme is read after doing the same.
pub fn is_safe_href(href: &str) -> bool {
    let cleaned: String = href
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let first_segment = cleaned
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    match first_segment.split_once(':') {
        None => true,
        Some((scheme, _)) => SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe)),
    }
}

/// `href` if it passes [`is_safe_href`], otherwise [`INERT_HREF`]
pub fn safe_href(href: &str) -> &str {
    if is_safe_href(href) { href } else { INERT_HREF }
}

/// `<a>` with new-tab isolation for external targets. Unsafe targets are
/// neutralized.
pub fn link(href: &str) -> Element {
    let href = safe_href(href);
    let anchor = el("a").attr("href", href);
    if is_external(href) {
        anchor
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        anchor
    }
}

/// Call-to-action link. The label falls back through `override_label`, the
/// action's own `ariaLabel`, then its visible text.
pub fn action_link(action: &Action, class: &str, override_label: Option<&str>) -> Element {
    let label = override_label
        .or(action.aria_label.as_deref())
        .unwrap_or(&action.text);
    link(&action.href)
        .class(class)
        .attr("aria-label", label)
        .text(action.text.clone())
}

pub fn nav_link(item: &NavLink) -> Element {
    link(&item.href)
        .attr("aria-label", item.label.clone())
        .text(item.label.clone())
}

/// Outer element of a section, carrying kind, anchor id and entrance motion
pub fn section_shell(
    tag: &'static str,
    kind: SectionKind,
    id: Option<&str>,
    motion: &Motion,
    cx: &RenderContext,
) -> Element {
    let entrance = effective_entrance(motion, cx.reduced_motion());
    el(tag)
        .class(format!("lp-section lp-{} {}", kind.as_str(), entrance_class(entrance)))
        .maybe_attr("id", id)
        .attr("data-section", kind.as_str())
        .attr("data-motion", entrance.as_str())
}

/// Headline plus optional subheadline
pub fn section_header(heading_id: &str, headline: &str, subheadline: Option<&str>) -> Element {
    el("header")
        .class("lp-section-header")
        .child(
            el("h2")
                .attr("id", heading_id)
                .role("headline")
                .text(headline),
        )
        .maybe_child(subheadline.map(|text| el("p").role("subheadline").text(text)))
}

/// Image, video or Lottie container
pub fn media(media: &Media, label: Option<&str>, motion: &Motion, cx: &RenderContext) -> Element {
    let ambient = allows_ambient_motion(motion, cx.reduced_motion());
    let label = label.or(media.alt.as_deref());
    let node = match media.media_type {
        MediaType::Image => el("img")
            .attr("src", media.src.clone())
            .attr("alt", label.unwrap_or_default())
            .attr("loading", "lazy")
            .attr("decoding", "async"),
        MediaType::Video => el("video")
            .attr("src", media.src.clone())
            .maybe_attr("poster", media.poster.clone())
            .maybe_attr("aria-label", label)
            .flag("autoplay", media.autoplay && ambient)
            .flag("loop", media.loop_playback)
            .flag("muted", media.muted)
            .flag("playsinline", true)
            .flag("controls", !media.autoplay || !ambient)
            .attr("preload", "metadata"),
        MediaType::Lottie => el("div")
            .class("lp-lottie")
            .attr("role", "img")
            .maybe_attr("aria-label", label)
            .attr("data-lottie-src", media.src.clone())
            .attr("data-autoplay", if ambient { "true" } else { "false" }),
    };
    let speed = media.parallax_speed.filter(|_| ambient);
    node.role("media")
        .maybe_attr("data-parallax-speed", speed.map(|s| s.to_string()))
}

/// `$12`, `€9.50`, `49 CHF`
pub fn format_price(amount: f64, currency: &str) -> String {
    let number = if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{number}"),
        None => format!("{number} {currency}"),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{RenderEnv, RenderedNode};
    use crate::core::spec::Entrance;
    use crate::core::theme::ThemeTokens;

    fn image(speed: Option<f64>) -> Media {
        Media {
            media_type: MediaType::Image,
            src: "/hero.png".to_string(),
            alt: Some("Dashboard".to_string()),
            parallax_speed: speed,
            autoplay: false,
            loop_playback: false,
            muted: true,
            poster: None,
        }
    }

    fn reduced() -> RenderContext {
        RenderContext::new(
            RenderEnv {
                prefers_reduced_motion: true,
            },
            ThemeTokens::default(),
        )
    }

    #[test]
    fn test_external_detection() {
        assert!(is_external("https://acme.test"));
        assert!(is_external("HTTP://acme.test"));
        assert!(is_external("//cdn.acme.test/x"));
        assert!(!is_external("/pricing"));
        assert!(!is_external("#faq"));
        assert!(!is_external("mailto:hi@acme.test"));
    }

    #[test]
    fn test_safe_href_allow_list() {
        assert!(is_safe_href("/pricing"));
        assert!(is_safe_href("pricing.html"));
        assert!(is_safe_href("#faq"));
        assert!(is_safe_href("?plan=pro"));
        assert!(is_safe_href("//cdn.acme.test/x"));
        assert!(is_safe_href("HTTPS://acme.test"));
        assert!(is_safe_href("mailto:hi@acme.test"));
        assert!(is_safe_href("tel:+15550100"));
        assert!(is_safe_href("/search?q=a:b"));

        assert!(!is_safe_href("javascript:alert(1)"));
        assert!(!is_safe_href("JaVaScRiPt:alert(1)"));
        assert!(!is_safe_href("  javascript:alert(1)"));
        assert!(!is_safe_href("\u{1}javascript:alert(1)"));
        assert!(!is_safe_href("java\tscript:alert(1)"));
        assert!(!is_safe_href("jav\nascript:alert(1)"));
        assert!(!is_safe_href("data:text/html;base64,PHNjcmlwdD4="));
        assert!(!is_safe_href("DATA:text/html,<script>alert(1)</script>"));
        assert!(!is_safe_href("vbscript:msgbox(1)"));
    }

    #[test]
    fn test_unsafe_links_are_neutralized() {
        let html = RenderedNode::from(link("JaVaScRiPt:alert(1)")).to_html();
        assert_eq!(html, r##"<a href="#"></a>"##);
        let action = Action {
            text: "Go".to_string(),
            href: "data:text/html,<b>x</b>".to_string(),
            aria_label: None,
        };
        let node = action_link(&action, "btn", None);
        assert_eq!(node.get_attr("href"), Some(INERT_HREF));
    }

    #[test]
    fn test_external_links_are_isolated() {
        let html = RenderedNode::from(link("https://acme.test")).to_html();
        assert_eq!(
            html,
            r#"<a href="https://acme.test" target="_blank" rel="noopener noreferrer"></a>"#
        );
        let html = RenderedNode::from(link("/docs")).to_html();
        assert_eq!(html, r#"<a href="/docs"></a>"#);
    }

    #[test]
    fn test_action_label_fallbacks() {
        let mut action = Action {
            text: "Start".to_string(),
            href: "/start".to_string(),
            aria_label: None,
        };
        assert_eq!(action_link(&action, "btn", None).get_attr("aria-label"), Some("Start"));
        action.aria_label = Some("Start free trial".to_string());
        assert_eq!(
            action_link(&action, "btn", None).get_attr("aria-label"),
            Some("Start free trial")
        );
        assert_eq!(
            action_link(&action, "btn", Some("Begin")).get_attr("aria-label"),
            Some("Begin")
        );
    }

    #[test]
    fn test_shell_reflects_reduced_motion() {
        let motion = Motion {
            entrance: Entrance::Slide,
            respect_reduced_motion: true,
        };
        let shell = section_shell("section", SectionKind::Hero, Some("top"), &motion, &reduced());
        assert_eq!(shell.get_attr("data-motion"), Some("none"));
        assert_eq!(shell.get_attr("id"), Some("top"));
        assert!(shell.get_attr("class").unwrap().contains("lp-motion-none"));

        let shell = section_shell("section", SectionKind::Hero, None, &motion, &RenderContext::default());
        assert_eq!(shell.get_attr("data-motion"), Some("slide"));
        assert!(!shell.has_attr("id"));
    }

    #[test]
    fn test_parallax_dropped_under_reduced_motion() {
        let motion = Motion::default();
        let node = media(&image(Some(0.5)), None, &motion, &RenderContext::default());
        assert_eq!(node.get_attr("data-parallax-speed"), Some("0.5"));
        assert_eq!(node.get_attr("alt"), Some("Dashboard"));

        let node = media(&image(Some(0.5)), None, &motion, &reduced());
        assert!(!node.has_attr("data-parallax-speed"));

        let node = media(&image(None), Some("Product shot"), &motion, &RenderContext::default());
        assert!(!node.has_attr("data-parallax-speed"));
        assert_eq!(node.get_attr("alt"), Some("Product shot"));
    }

    #[test]
    fn test_video_autoplay_respects_reduced_motion() {
        let video = Media {
            media_type: MediaType::Video,
            autoplay: true,
            ..image(None)
        };
        let node = media(&video, None, &Motion::default(), &RenderContext::default());
        assert!(node.has_attr("autoplay"));
        assert!(!node.has_attr("controls"));

        let node = media(&video, None, &Motion::default(), &reduced());
        assert!(!node.has_attr("autoplay"));
        assert!(node.has_attr("controls"));
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(12.0, "USD"), "$12");
        assert_eq!(format_price(9.5, "eur"), "€9.50");
        assert_eq!(format_price(0.0, "GBP"), "£0");
        assert_eq!(format_price(49.0, "CHF"), "49 CHF");
    }
}
