//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <main class="lp-error-state">
            <h1>"404"</h1>
            <p class="lp-error-message">"There is no page at this address."</p>
            <p class="lp-error-guidance">
                "Pages are previewed at /preview with a spec or url query parameter."
            </p>
            <A href="/" attr:class="lp-btn lp-btn-primary">"Open the example page"</A>
        </main>
    }
}
