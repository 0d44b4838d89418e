//! Full-page error state for a spec that could not be shown

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::loader::LoadError;

#[component]
pub fn ErrorState(error: LoadError) -> impl IntoView {
    let field = match &error {
        LoadError::Schema(validation) => Some(validation.path.to_string()),
        _ => None,
    };
    let source = match &error {
        LoadError::Load { url, .. } => Some(url.clone()),
        _ => None,
    };

    view! {
        <Title text="Page spec error" />
        <main class="lp-error-state" role="alert" data-error-kind=error.kind().as_str()>
            <h1>{error.title()}</h1>
            <p class="lp-error-message">{error.to_string()}</p>
            {field.map(|path| view! {
                <p class="lp-error-detail">"Field: " <code>{path}</code></p>
            })}
            {source.map(|url| view! {
                <p class="lp-error-detail">"Source: " <code>{url}</code></p>
            })}
            <p class="lp-error-guidance">{error.guidance()}</p>
            <A href="/preview" attr:class="lp-btn lp-btn-secondary">
                "Show the example page"
            </A>
        </main>
    }
}
