//! Preview page
//!
//! Reads the spec from `?spec=` (inline JSON) or `?url=` (remote document),
//! falling back to the built-in example page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::core::loader::{
    DEFAULT_MAX_SPEC_BYTES, LoadError, LoadSequencer, SPEC_PARAM, SpecSource, URL_PARAM,
};
use crate::core::render::RenderEnv;
use crate::core::spec::PageSpec;
use crate::ui::error_state::ErrorState;
use crate::ui::motion::use_reduced_motion;
use crate::ui::page_view::PageView;

/// A finished remote load, tagged with the URL it was for
type RemoteResult = (String, Result<PageSpec, LoadError>);

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    Loading { url: String },
    Ready(PageSpec),
    Failed(LoadError),
}

impl From<Result<PageSpec, LoadError>> for PreviewState {
    fn from(result: Result<PageSpec, LoadError>) -> Self {
        match result {
            Ok(spec) => PreviewState::Ready(spec),
            Err(error) => PreviewState::Failed(error),
        }
    }
}

impl PreviewState {
    /// What to show for `source`. A remote result only counts when it
    /// belongs to the URL currently requested.
    pub fn resolve(source: &SpecSource, remote: Option<&RemoteResult>) -> Self {
        match source {
            SpecSource::Remote(url) => match remote {
                Some((loaded, result)) if loaded == url => result.clone().into(),
                _ => PreviewState::Loading { url: url.clone() },
            },
            local => local
                .load_local(DEFAULT_MAX_SPEC_BYTES)
                .map_or(PreviewState::Loading { url: String::new() }, Self::from),
        }
    }
}

#[component]
pub fn PreviewPage() -> impl IntoView {
    let query = use_query_map();
    let source = Memo::new(move |_| {
        query.with(|q| SpecSource::from_query(q.get(SPEC_PARAM), q.get(URL_PARAM)))
    });

    let reduced_motion = use_reduced_motion();
    let env = Signal::derive(move || RenderEnv {
        prefers_reduced_motion: reduced_motion.get(),
    });

    let remote = RwSignal::new(None::<RemoteResult>);
    let sequencer = LoadSequencer::new();

    // Every source change takes a ticket, so a slow fetch for an older URL
    // can never overwrite the current page
    Effect::new(move |_| {
        let source = source.get();
        let ticket = sequencer.begin();
        let SpecSource::Remote(url) = source else {
            return;
        };

        #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
        {
            use crate::core::loader::{FetchOptions, fetch_remote};
            use leptos::logging::{log, warn};

            let sequencer = sequencer.clone();
            leptos::task::spawn_local(async move {
                let result = fetch_remote(&url, &FetchOptions::default()).await;
                if !sequencer.is_current(ticket) {
                    log!("Discarding stale spec response for {}", url);
                    return;
                }
                match &result {
                    Ok(spec) => log!("Loaded {} sections from {}", spec.sections.len(), url),
                    Err(e) => warn!("Spec load failed: {}", e),
                }
                remote.set(Some((url, result)));
            });
        }
        #[cfg(not(all(feature = "hydrate", not(feature = "ssr"))))]
        {
            let _ = (url, ticket, remote);
        }
    });

    let state = Memo::new(move |_| {
        source.with(|source| remote.with(|remote| PreviewState::resolve(source, remote.as_ref())))
    });

    move || match state.get() {
        PreviewState::Loading { url } => view! {
            <Title text="Loading page spec" />
            <main class="lp-loading" aria-busy="true">
                <p role="status">"Loading page spec from " <code>{url}</code></p>
            </main>
        }
        .into_any(),
        PreviewState::Ready(spec) => view! { <PageView spec=spec env=env /> }.into_any(),
        PreviewState::Failed(error) => view! { <ErrorState error=error /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::{LoadErrorKind, LoadFailure};

    const INLINE: &str = r#"{"meta":{"title":"Inline","description":"D"},"sections":[]}"#;

    #[test]
    fn test_inline_and_fallback_resolve_immediately() {
        let inline = PreviewState::resolve(&SpecSource::Inline(INLINE.into()), None);
        assert!(matches!(inline, PreviewState::Ready(ref spec) if spec.meta.title == "Inline"));

        let fallback = PreviewState::resolve(&SpecSource::Fallback, None);
        assert!(matches!(fallback, PreviewState::Ready(ref spec) if spec.sections.len() == 8));
    }

    #[test]
    fn test_inline_parse_error() {
        let state = PreviewState::resolve(&SpecSource::Inline("{bad".into()), None);
        let PreviewState::Failed(error) = state else {
            panic!("expected failure");
        };
        assert_eq!(error.kind(), LoadErrorKind::Parse);
    }

    #[test]
    fn test_remote_waits_for_matching_result() {
        let source = SpecSource::Remote("https://b.test/spec.json".into());
        assert_eq!(
            PreviewState::resolve(&source, None),
            PreviewState::Loading { url: "https://b.test/spec.json".into() }
        );

        let stale: RemoteResult = (
            "https://a.test/spec.json".into(),
            crate::core::loader::parse_and_validate(INLINE),
        );
        assert!(matches!(
            PreviewState::resolve(&source, Some(&stale)),
            PreviewState::Loading { .. }
        ));

        let failed: RemoteResult = (
            "https://b.test/spec.json".into(),
            Err(LoadError::Load {
                url: "https://b.test/spec.json".into(),
                reason: LoadFailure::Status(404),
            }),
        );
        assert!(matches!(
            PreviewState::resolve(&source, Some(&failed)),
            PreviewState::Failed(LoadError::Load { .. })
        ));
    }
}
