//! Theme tokens
//!
//! Sections may override color tokens. Overrides are folded in document order
//! into one [`ThemeTokens`] value that is passed explicitly to every renderer,
//! so a later section wins over an earlier one token by token.

use serde::{Deserialize, Serialize};

use crate::core::spec::{PageSpec, ThemeOverrides};

/// Resolved color tokens for a page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub muted: Option<String>,
}

impl ThemeTokens {
    /// Fold every section's overrides in document order
    pub fn resolve(spec: &PageSpec) -> Self {
        spec.sections
            .iter()
            .filter_map(|section| section.theme_overrides())
            .fold(Self::default(), |mut tokens, overrides| {
                tokens.apply(overrides);
                tokens
            })
    }

    /// Tokens carried by a single override block
    pub fn from_overrides(overrides: &ThemeOverrides) -> Self {
        let mut tokens = Self::default();
        tokens.apply(overrides);
        tokens
    }

    /// Overwrite every token the overrides set; unset tokens keep their value
    pub fn apply(&mut self, overrides: &ThemeOverrides) {
        let slots = [
            (&mut self.primary, &overrides.primary),
            (&mut self.secondary, &overrides.secondary),
            (&mut self.accent, &overrides.accent),
            (&mut self.background, &overrides.background),
            (&mut self.foreground, &overrides.foreground),
            (&mut self.muted, &overrides.muted),
        ];
        for (slot, value) in slots {
            if let Some(value) = value.as_deref().filter(|v| is_safe_css_value(v)) {
                *slot = Some(value.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.custom_properties().is_empty()
    }

    /// `(--lp-color-*, value)` pairs for every set token
    pub fn custom_properties(&self) -> Vec<(&'static str, &str)> {
        [
            ("--lp-color-primary", &self.primary),
            ("--lp-color-secondary", &self.secondary),
            ("--lp-color-accent", &self.accent),
            ("--lp-color-background", &self.background),
            ("--lp-color-foreground", &self.foreground),
            ("--lp-color-muted", &self.muted),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Inline `style` value, `None` when no token is set
    pub fn to_style(&self) -> Option<String> {
        let properties = self.custom_properties();
        if properties.is_empty() {
            return None;
        }
        Some(
            properties
                .into_iter()
                .map(|(name, value)| format!("{name}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Colors, numbers and simple functions like `rgb(…)`; nothing that can
/// terminate the declaration or pull in a URL.
pub fn is_safe_css_value(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    !value.trim().is_empty()
        && !lowered.contains("url(")
        && !lowered.contains("expression(")
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || " #(),.%-/".contains(c))
}
