//! Section hosts for the preview page
//!
//! Markup comes from the core renderers. Interactive sections own their
//! state here and re-render when it changes; events are delegated from the
//! host element through `data-action` attributes.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use leptos::html::Div;
use leptos::prelude::*;

use crate::core::interaction::{
    BillingPeriod, BillingToggle, CarouselState, HeaderState, NewsletterState,
};
use crate::core::render::{
    self, RenderContext, faq, footer, header, is_safe_href, pricing, testimonials,
};
use crate::core::spec::{
    FaqSection, FooterSection, HeaderSection, PricingSection, SectionSpec, TestimonialsLayout,
    TestimonialsSection,
};
use crate::ui::delegation::{DelegatedAction, delegated_action, within_role};

/// Polling period for carousel autoplay; the state decides when to advance
const CAROUSEL_TICK_MS: u64 = 250;

/// One section of the page
#[component]
pub fn SectionView(section: SectionSpec, #[prop(into)] cx: Signal<RenderContext>) -> impl IntoView {
    match section {
        SectionSpec::Pricing(section) => view! { <PricingView section=section cx=cx /> }.into_any(),
        SectionSpec::Testimonials(section) => view! { <TestimonialsView section=section cx=cx /> }.into_any(),
        SectionSpec::Faq(section) => view! { <FaqView section=section cx=cx /> }.into_any(),
        SectionSpec::Footer(section) => view! { <FooterView section=section cx=cx /> }.into_any(),
        SectionSpec::Header(section) => view! { <HeaderView section=section cx=cx /> }.into_any(),
        other => view! { <StaticSection section=other cx=cx /> }.into_any(),
    }
}

/// Hero, features, CTA band and placeholders
#[component]
fn StaticSection(section: SectionSpec, cx: Signal<RenderContext>) -> impl IntoView {
    let html = move || render::render_section(&section, &cx.get()).to_html();
    view! { <div class="lp-section-host" inner_html=html></div> }
}

// ============================================================================
// Pricing
// ============================================================================

#[component]
fn PricingView(section: PricingSection, cx: Signal<RenderContext>) -> impl IntoView {
    let toggle = RwSignal::new(BillingToggle::new(section.billing));
    let host = NodeRef::<Div>::new();

    let html = move || toggle.with(|t| pricing::render_with(&section, &cx.get(), t).to_html());

    let on_click = move |ev: MouseEvent| {
        let Some(action) = delegated_action(&ev) else {
            return;
        };
        if let Some(period) = BillingPeriod::from_action(&action.name) {
            toggle.maybe_update(|t| t.select(period));
            refocus(host, &action);
        }
    };

    view! { <div class="lp-section-host" node_ref=host on:click=on_click inner_html=html></div> }
}

// ============================================================================
// Testimonials
// ============================================================================

#[component]
fn TestimonialsView(section: TestimonialsSection, cx: Signal<RenderContext>) -> impl IntoView {
    let carousel = RwSignal::new(testimonials::initial_state(&section));
    let host = NodeRef::<Div>::new();
    let autoplay = section
        .autoplay
        .filter(|_| section.layout == TestimonialsLayout::Carousel);

    let html = move || {
        let now = now_ms();
        carousel.with(|c| testimonials::render_with(&section, &cx.get(), c, now).to_html())
    };

    if autoplay.is_some() {
        start_autoplay(carousel, cx);
    }

    let on_click = move |ev: MouseEvent| {
        let Some(action) = delegated_action(&ev) else {
            return;
        };
        let now = now_ms();
        let handled = match action.name.as_str() {
            "carousel-next" => {
                carousel.update(|c| c.next(now));
                true
            }
            "carousel-prev" => {
                carousel.update(|c| c.prev(now));
                true
            }
            "carousel-toggle-autoplay" => {
                carousel.update(|c| c.toggle_autoplay(now));
                true
            }
            _ => false,
        };
        if handled {
            refocus(host, &action);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if !within_role(&ev, "carousel") {
            return;
        }
        let now = now_ms();
        let key = ev.key();
        if carousel.try_update(|c| c.handle_key(&key, now)).unwrap_or(false) {
            ev.prevent_default();
            refocus_selector(host, r#"[data-role="carousel"]"#.to_string());
        }
    };

    // Pause/resume does not change the markup, so no re-render is needed
    view! {
        <div
            class="lp-section-host"
            node_ref=host
            on:click=on_click
            on:keydown=on_keydown
            on:mouseenter=move |_: MouseEvent| {
                carousel.update_untracked(|c| c.pointer_enter());
            }
            on:mouseleave=move |_: MouseEvent| {
                carousel.update_untracked(|c| c.pointer_leave(now_ms()));
            }
            on:focusin=move |_: FocusEvent| {
                carousel.update_untracked(|c| c.focus_in());
            }
            on:focusout=move |_: FocusEvent| {
                carousel.update_untracked(|c| c.focus_out(now_ms()));
            }
            inner_html=html
        ></div>
    }
}

/// Drive autoplay from a scoped interval, released when the section unmounts
fn start_autoplay(carousel: RwSignal<CarouselState>, cx: Signal<RenderContext>) {
    #[cfg(not(feature = "ssr"))]
    {
        use std::time::Duration;

        let tick = move || {
            if cx.with_untracked(|c| c.reduced_motion()) {
                return;
            }
            let now = now_ms();
            carousel.maybe_update(|c| c.tick(now));
        };
        match set_interval_with_handle(tick, Duration::from_millis(CAROUSEL_TICK_MS)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("Carousel autoplay unavailable: {:?}", e),
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (carousel, cx, CAROUSEL_TICK_MS);
    }
}

// ============================================================================
// FAQ
// ============================================================================

#[component]
fn FaqView(section: FaqSection, cx: Signal<RenderContext>) -> impl IntoView {
    let accordion = RwSignal::new(faq::initial_state(&section));
    let host = NodeRef::<Div>::new();

    let html = move || accordion.with(|a| faq::render_with(&section, &cx.get(), a).to_html());

    let on_click = move |ev: MouseEvent| {
        let Some(action) = delegated_action(&ev) else {
            return;
        };
        if let ("faq-toggle", Some(index)) = (action.name.as_str(), action.index) {
            accordion.update(|a| a.toggle(index));
            refocus(host, &action);
        }
    };

    view! { <div class="lp-section-host" node_ref=host on:click=on_click inner_html=html></div> }
}

// ============================================================================
// Header
// ============================================================================

#[component]
fn HeaderView(section: HeaderSection, cx: Signal<RenderContext>) -> impl IntoView {
    let state = RwSignal::new(HeaderState::default());
    let host = NodeRef::<Div>::new();

    let html = move || state.with(|s| header::render_with(&section, &cx.get(), s).to_html());

    #[cfg(not(feature = "ssr"))]
    {
        let scroll_y = || {
            leptos::web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        };
        Effect::new(move |_| {
            state.maybe_update(|s| s.on_scroll(scroll_y()));
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            state.maybe_update(|s| s.on_scroll(scroll_y()));
        });
        on_cleanup(move || drop(handle));
    }

    let on_click = move |ev: MouseEvent| match delegated_action(&ev) {
        Some(action) if action.name == "nav-toggle" => {
            state.update(|s| s.toggle_menu());
            refocus(host, &action);
        }
        // Following a nav link closes the mobile menu
        _ if within_role(&ev, "nav") => {
            state.maybe_update(|s| std::mem::replace(&mut s.menu_open, false));
        }
        _ => {}
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && state.with_untracked(|s| s.menu_open) {
            state.update(|s| s.close_menu());
            refocus_selector(host, r#"[data-action="nav-toggle"]"#.to_string());
        }
    };

    view! {
        <div
            class="lp-section-host"
            node_ref=host
            on:click=on_click
            on:keydown=on_keydown
            inner_html=html
        ></div>
    }
}

// ============================================================================
// Footer
// ============================================================================

#[component]
fn FooterView(section: FooterSection, cx: Signal<RenderContext>) -> impl IntoView {
    let state = RwSignal::new(NewsletterState::default());
    let host = NodeRef::<Div>::new();
    let endpoint = section
        .newsletter
        .as_ref()
        .and_then(|n| n.endpoint.clone())
        .filter(|endpoint| is_safe_href(endpoint));

    let html = move || state.with(|s| footer::render_with(&section, &cx.get(), s).to_html());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (email, honeypot) = form_values(&ev);
        let Some(email) = state.try_update(|s| s.submit(&email, &honeypot)).flatten() else {
            if state.with_untracked(|s| s.is_invalid()) {
                refocus_selector(host, r#"[data-role="newsletter-email"]"#.to_string());
            }
            return;
        };
        match endpoint.clone() {
            Some(endpoint) => subscribe(state, endpoint, email),
            // No endpoint configured: the preview only confirms locally
            None => state.update(|s| s.succeeded()),
        }
    };

    view! { <div class="lp-section-host" node_ref=host on:submit=on_submit inner_html=html></div> }
}

/// Email and honeypot values of the submitted form
fn form_values(ev: &SubmitEvent) -> (String, String) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::interaction::HONEYPOT_FIELD;
        use leptos::wasm_bindgen::JsCast;
        use leptos::web_sys::{FormData, HtmlFormElement};

        let data = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            .and_then(|form| FormData::new_with_form(&form).ok());
        let field = |name: &str| {
            data.as_ref()
                .and_then(|d| d.get(name).as_string())
                .unwrap_or_default()
        };
        (field("email"), field(HONEYPOT_FIELD))
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ev;
        (String::new(), String::new())
    }
}

fn subscribe(state: RwSignal<NewsletterState>, endpoint: String, email: String) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_net::http::Request;
        use leptos::task::spawn_local;

        spawn_local(async move {
            let request = match Request::post(&endpoint)
                .header("Accept", "application/json")
                .json(&serde_json::json!({ "email": email }))
            {
                Ok(request) => request,
                Err(e) => {
                    state.update(|s| s.failed(e.to_string()));
                    return;
                }
            };
            match request.send().await {
                Ok(response) if response.ok() => state.update(|s| s.succeeded()),
                Ok(response) => {
                    leptos::logging::warn!("Newsletter signup rejected with HTTP {}", response.status());
                    state.update(|s| s.failed(format!("HTTP {}", response.status())));
                }
                Err(e) => {
                    leptos::logging::warn!("Newsletter signup failed: {}", e);
                    state.update(|s| s.failed(e.to_string()));
                }
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (state, endpoint, email);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Wall clock in milliseconds for the carousel state machine
fn now_ms() -> u64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(feature = "ssr")]
    {
        0
    }
}

/// Put focus back on the control that triggered a re-render
fn refocus(host: NodeRef<Div>, action: &DelegatedAction) {
    refocus_selector(host, action.selector());
}

fn refocus_selector(host: NodeRef<Div>, selector: String) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;

        request_animation_frame(move || {
            let Some(host) = host.get_untracked() else {
                return;
            };
            if let Ok(Some(element)) = host.query_selector(&selector) {
                if let Ok(element) = element.dyn_into::<leptos::web_sys::HtmlElement>() {
                    let _ = element.focus();
                }
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (host, selector);
    }
}
