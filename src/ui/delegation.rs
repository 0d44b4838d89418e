//! Event delegation for server-shaped markup
//!
//! Section markup is produced as HTML by the core renderers, so handlers sit
//! on the host element and find the control through its `data-action`.

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;
use leptos::web_sys;

/// A control that received an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedAction {
    pub name: String,
    pub index: Option<usize>,
}

impl DelegatedAction {
    pub fn new(name: impl Into<String>, index: Option<&str>) -> Self {
        Self {
            name: name.into(),
            index: index.and_then(|raw| raw.trim().parse().ok()),
        }
    }

    /// CSS selector matching the control again after a re-render
    pub fn selector(&self) -> String {
        match self.index {
            Some(index) => format!(r#"[data-action="{}"][data-index="{index}"]"#, self.name),
            None => format!(r#"[data-action="{}"]"#, self.name),
        }
    }
}

/// Closest `[data-action]` ancestor of the event target
pub fn delegated_action(event: &web_sys::Event) -> Option<DelegatedAction> {
    #[cfg(not(feature = "ssr"))]
    {
        let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
        let control = target.closest("[data-action]").ok()??;
        let name = control.get_attribute("data-action")?;
        Some(DelegatedAction::new(
            name,
            control.get_attribute("data-index").as_deref(),
        ))
    }
    #[cfg(feature = "ssr")]
    {
        let _ = event;
        None
    }
}

/// Whether the event started inside an element with the given `data-role`
pub fn within_role(event: &web_sys::Event, role: &str) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&format!(r#"[data-role="{role}"]"#)).ok().flatten())
            .is_some()
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (event, role);
        false
    }
}
