//! A validated page as Leptos views

use leptos::prelude::*;

use crate::core::head::HeadMetadata;
use crate::core::render::{RenderContext, RenderEnv};
use crate::core::spec::PageSpec;
use crate::core::theme::ThemeTokens;
use crate::ui::head::PageHead;
use crate::ui::sections::SectionView;

#[component]
pub fn PageView(spec: PageSpec, #[prop(into)] env: Signal<RenderEnv>) -> impl IntoView {
    let theme = ThemeTokens::resolve(&spec);
    let style = theme.to_style();
    let head = HeadMetadata::from_meta(&spec.meta);

    let sections = spec
        .sections
        .into_iter()
        .enumerate()
        .map(|(position, section)| {
            let theme = theme.clone();
            let cx = Signal::derive(move || RenderContext::new(env.get(), theme.clone()).at(position));
            view! { <SectionView section=section cx=cx /> }
        })
        .collect_view();

    view! {
        <PageHead head=head />
        <main class="lp-page" style=style.unwrap_or_default()>
            {sections}
        </main>
    }
}
