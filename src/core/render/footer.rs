//! Footer: logo, link groups, social links and newsletter signup

use super::common::{is_safe_href, link, nav_link, section_shell};
use super::{Element, RenderContext, RenderedNode, el, placeholder};
use crate::core::interaction::{HONEYPOT_FIELD, NewsletterState};
use crate::core::spec::{
    FooterSection, LinkGroup, Logo, Motion, Newsletter, SchemaEnum, SectionKind, SectionSpec,
    SocialLink,
};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Footer(footer) => render(footer, cx),
        other => placeholder(other),
    }
}

pub fn render(section: &FooterSection, cx: &RenderContext) -> RenderedNode {
    render_with(section, cx, &NewsletterState::default())
}

pub fn render_with(
    section: &FooterSection,
    cx: &RenderContext,
    newsletter: &NewsletterState,
) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Footer, section.id.as_deref());

    let groups = (!section.link_groups.is_empty()).then(|| {
        el("nav")
            .class("lp-footer-nav")
            .attr("aria-label", "Footer")
            .role("link-groups")
            .children(section.link_groups.iter().map(link_group))
    });

    let social = (!section.social.is_empty()).then(|| {
        el("ul")
            .class("lp-social")
            .role("social")
            .children(
                section
                    .social
                    .iter()
                    .map(|item| el("li").child(social_link(item))),
            )
    });

    section_shell(
        "footer",
        SectionKind::Footer,
        section.id.as_deref(),
        &Motion::default(),
        cx,
    )
    .maybe_child(section.logo.as_ref().map(logo))
    .maybe_child(groups)
    .maybe_child(
        section
            .newsletter
            .as_ref()
            .map(|config| newsletter_form(config, &prefix, newsletter)),
    )
    .maybe_child(social)
    .child(
        el("p")
            .class("lp-copyright")
            .role("copyright")
            .text(section.copyright.clone()),
    )
    .into()
}

fn logo(logo: &Logo) -> Element {
    let image = el("img")
        .attr("src", logo.src.clone())
        .attr("alt", logo.alt.clone())
        .attr("loading", "lazy");
    match &logo.href {
        Some(href) => link(href)
            .class("lp-footer-logo")
            .attr("aria-label", logo.alt.clone())
            .role("logo")
            .child(image),
        None => image.class("lp-footer-logo").role("logo"),
    }
}

fn link_group(group: &LinkGroup) -> Element {
    el("div")
        .class("lp-link-group")
        .role("link-group")
        .child(el("h3").text(group.title.clone()))
        .child(
            el("ul").children(
                group
                    .links
                    .iter()
                    .map(|item| el("li").child(nav_link(item))),
            ),
        )
}

fn social_link(item: &SocialLink) -> Element {
    let name = item.platform.display_name();
    let label = item
        .label
        .clone()
        .unwrap_or_else(|| format!("Follow us on {name}"));
    link(&item.href)
        .class("lp-social-link")
        .attr("data-platform", item.platform.as_str())
        .attr("aria-label", label)
        .role("social-link")
        .text(name)
}

fn newsletter_form(config: &Newsletter, prefix: &str, state: &NewsletterState) -> Element {
    let heading_id = format!("{prefix}-newsletter-title");
    let input_id = format!("{prefix}-newsletter-email");
    let status_id = format!("{prefix}-newsletter-status");
    let honeypot_id = format!("{prefix}-newsletter-{HONEYPOT_FIELD}");
    let message = state.message();

    let email = el("input")
        .attr("id", input_id.clone())
        .attr("type", "email")
        .attr("name", "email")
        .attr("placeholder", config.placeholder.clone())
        .attr("autocomplete", "email")
        .attr("aria-label", "Email address")
        .maybe_attr("value", (!state.email.is_empty()).then(|| state.email.clone()))
        .maybe_attr("aria-invalid", state.is_invalid().then_some("true"))
        .maybe_attr("aria-describedby", message.as_ref().map(|_| status_id.clone()))
        .flag("required", true)
        .role("newsletter-email");

    // Off-screen decoy; people never see or tab into it
    let honeypot = el("div")
        .class("lp-hp")
        .attr("aria-hidden", "true")
        .child(el("label").attr("for", honeypot_id.clone()).text("Website"))
        .child(
            el("input")
                .attr("id", honeypot_id)
                .attr("type", "text")
                .attr("name", HONEYPOT_FIELD)
                .attr("tabindex", "-1")
                .attr("autocomplete", "off")
                .role("honeypot"),
        );

    let endpoint = config.endpoint.as_deref().filter(|e| is_safe_href(e));
    el("form")
        .class("lp-newsletter")
        .attr("aria-labelledby", heading_id.clone())
        .maybe_attr("action", endpoint)
        .maybe_attr("method", endpoint.map(|_| "post"))
        .attr("data-action", "newsletter-submit")
        .flag("novalidate", true)
        .role("newsletter")
        .child(el("h3").attr("id", heading_id).text(config.headline.clone()))
        .child(
            el("label")
                .class("lp-sr-only")
                .attr("for", input_id)
                .text("Email address"),
        )
        .child(email)
        .child(honeypot)
        .child(
            el("button")
                .attr("type", "submit")
                .attr("aria-label", format!("{}: {}", config.submit_label, config.headline))
                .role("newsletter-submit")
                .text(config.submit_label.clone()),
        )
        .maybe_child(message.map(|text| {
            el("p")
                .attr("id", status_id)
                .attr("role", "status")
                .role("newsletter-status")
                .text(text)
        }))
}
