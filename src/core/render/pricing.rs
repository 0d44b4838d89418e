//! Pricing section with monthly/yearly toggle

use super::common::{action_link, format_price, section_header, section_shell};
use super::{Element, RenderContext, RenderedNode, el, placeholder};
use crate::core::interaction::{BillingPeriod, BillingToggle};
use crate::core::spec::{Motion, PricingPlan, PricingSection, SectionKind, SectionSpec};

pub(super) fn render_section(section: &SectionSpec, cx: &RenderContext) -> RenderedNode {
    match section {
        SectionSpec::Pricing(pricing) => render(pricing, cx),
        other => placeholder(other),
    }
}

/// Render with the initial billing period
pub fn render(section: &PricingSection, cx: &RenderContext) -> RenderedNode {
    render_with(section, cx, &BillingToggle::new(section.billing))
}

pub fn render_with(
    section: &PricingSection,
    cx: &RenderContext,
    toggle: &BillingToggle,
) -> RenderedNode {
    let prefix = cx.id_prefix(SectionKind::Pricing, section.id.as_deref());
    let heading_id = format!("{prefix}-title");
    let period = toggle.period();

    let plans = (!section.plans.is_empty()).then(|| {
        el("div")
            .class("lp-plans")
            .role("plans")
            .children(section.plans.iter().map(|plan| plan_card(plan, period)))
    });

    section_shell(
        "section",
        SectionKind::Pricing,
        section.id.as_deref(),
        &Motion::default(),
        cx,
    )
    .attr("aria-labelledby", heading_id.clone())
    .attr("data-billing-period", period.label().to_ascii_lowercase())
    .child(section_header(
        &heading_id,
        &section.headline,
        section.subheadline.as_deref(),
    ))
    .maybe_child(toggle.is_interactive().then(|| billing_toggle(period)))
    .maybe_child(plans)
    .into()
}

fn billing_toggle(current: BillingPeriod) -> Element {
    let button = |period: BillingPeriod| {
        let selected = period == current;
        el("button")
            .attr("type", "button")
            .class(if selected {
                "lp-toggle-option lp-selected"
            } else {
                "lp-toggle-option"
            })
            .attr("data-action", period.action())
            .attr("aria-pressed", if selected { "true" } else { "false" })
            .attr(
                "aria-label",
                format!("Show {} prices", period.label().to_ascii_lowercase()),
            )
            .text(period.label())
    };

    el("div")
        .class("lp-billing-toggle")
        .attr("role", "group")
        .attr("aria-label", "Billing period")
        .role("billing-toggle")
        .child(button(BillingPeriod::Monthly))
        .child(button(BillingPeriod::Yearly))
}

fn plan_card(plan: &PricingPlan, period: BillingPeriod) -> Element {
    let features = (!plan.features.is_empty()).then(|| {
        el("ul")
            .class("lp-plan-features")
            .role("plan-features")
            .children(
                plan.features
                    .iter()
                    .map(|feature| el("li").text(feature.clone())),
            )
    });

    let cta_label = plan
        .cta
        .aria_label
        .clone()
        .unwrap_or_else(|| format!("{} ({} plan)", plan.cta.text, plan.name));

    el("article")
        .class(if plan.highlight {
            "lp-plan lp-plan-highlight"
        } else {
            "lp-plan"
        })
        .role("plan")
        .maybe_attr("data-highlight", plan.highlight.then_some("true"))
        .maybe_child(
            plan.highlight
                .then(|| el("span").class("lp-badge").role("plan-badge").text("Most popular")),
        )
        .child(el("h3").role("plan-name").text(plan.name.clone()))
        .maybe_child(
            plan.description
                .as_ref()
                .map(|text| el("p").role("plan-description").text(text.clone())),
        )
        .child(
            el("p")
                .class("lp-price")
                .role("price")
                .child(
                    el("span")
                        .role("amount")
                        .text(format_price(period.price_of(plan), &plan.currency)),
                )
                .child(el("span").role("period").text(period.suffix())),
        )
        .maybe_child(features)
        .child(action_link(&plan.cta, "lp-btn", Some(&cta_label)).role("plan-cta"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::test_section;
    use serde_json::json;

    fn pricing(billing: &str) -> PricingSection {
        let value = json!({
            "type": "pricing",
            "headline": "Plans",
            "billing": billing,
            "plans": [
                {
                    "name": "Starter",
                    "monthlyPrice": 10,
                    "yearlyPrice": 100,
                    "features": ["1 project"],
                    "highlight": true,
                    "cta": { "text": "Buy", "href": "/buy/starter" },
                },
                {
                    "name": "Pro",
                    "monthlyPrice": 25,
                    "yearlyPrice": 250,
                    "currency": "EUR",
                    "features": [],
                    "highlight": true,
                    "cta": { "text": "Buy", "href": "/buy/pro" },
                },
            ],
        });
        match test_section(value) {
            SectionSpec::Pricing(pricing) => pricing,
            other => panic!("expected pricing, got {other:?}"),
        }
    }

    fn amounts(node: &RenderedNode) -> Vec<String> {
        node.find_role("amount").iter().map(|e| e.text_content()).collect()
    }

    #[test]
    fn test_toggle_switches_every_plan() {
        let section = pricing("both");
        let mut toggle = BillingToggle::new(section.billing);
        let monthly = render_with(&section, &RenderContext::default(), &toggle);
        assert_eq!(amounts(&monthly), vec!["$10", "€25"]);
        assert_eq!(monthly.find_role("billing-toggle").len(), 1);

        toggle.select(BillingPeriod::Yearly);
        let yearly = render_with(&section, &RenderContext::default(), &toggle);
        assert_eq!(amounts(&yearly), vec!["$100", "€250"]);
        let pressed: Vec<_> = yearly
            .find_all(|e| e.get_attr("aria-pressed") == Some("true"))
            .iter()
            .map(|e| e.get_attr("data-action").unwrap_or_default().to_string())
            .collect();
        assert_eq!(pressed, vec!["billing-yearly"]);
    }

    #[test]
    fn test_pinned_billing_hides_toggle() {
        let node = render(&pricing("yearly"), &RenderContext::default());
        assert!(node.find_role("billing-toggle").is_empty());
        assert_eq!(amounts(&node), vec!["$100", "€250"]);
    }

    #[test]
    fn test_multiple_highlights_all_rendered() {
        let node = render(&pricing("both"), &RenderContext::default());
        let highlighted = node.find_all(|e| e.get_attr("data-highlight") == Some("true"));
        assert_eq!(highlighted.len(), 2);
        assert_eq!(node.find_role("plan-badge").len(), 2);
    }

    #[test]
    fn test_optional_plan_fields_omitted() {
        let node = render(&pricing("both"), &RenderContext::default());
        assert!(node.find_role("plan-description").is_empty());
        // Pro has no feature bullets
        assert_eq!(node.find_role("plan-features").len(), 1);
        let ctas = node.find_role("plan-cta");
        assert_eq!(ctas[1].get_attr("aria-label"), Some("Buy (Pro plan)"));
    }
}
