//! Reduced-motion preference
//!
//! The signal starts `false` so server output and the first client render
//! agree; the real preference is read once mounted and followed afterwards.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Current `prefers-reduced-motion` value, `false` outside the browser
pub fn prefers_reduced_motion() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media(REDUCED_MOTION_QUERY) {
                return query.matches();
            }
        }
    }
    false
}

/// Signal tracking the preference for the lifetime of the calling component.
/// The change listener is removed when the component's owner is cleaned up.
pub fn use_reduced_motion() -> RwSignal<bool> {
    let reduced = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::closure::Closure;

        Effect::new(move |_| reduced.set(prefers_reduced_motion()));

        if let Some(query) = web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        {
            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| {
                    reduced.try_set(e.matches());
                },
            );
            let _ = query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

            hold_until_cleanup((query, handler), |(query, handler)| {
                let _ = query.remove_event_listener_with_callback(
                    "change",
                    handler.as_ref().unchecked_ref(),
                );
            });
        }
    }

    #[cfg(feature = "ssr")]
    let _ = REDUCED_MOTION_QUERY;

    reduced
}

/// Keep `resource` alive until the current owner is cleaned up, then pass it
/// to `release` and drop it
pub fn hold_until_cleanup<T: 'static>(
    resource: T,
    release: impl Fn(&T) + Send + Sync + 'static,
) {
    let held = StoredValue::new_local(resource);
    on_cleanup(move || {
        held.try_with_value(|resource| release(resource));
    });
}
