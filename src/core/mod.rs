//! Core page model, validation and rendering

#[cfg(feature = "ssr")]
pub mod config;
pub mod default_spec;
pub mod head;
pub mod interaction;
pub mod loader;
pub mod motion;
pub mod render;
pub mod spec;
#[cfg(feature = "ssr")]
pub mod spec_api;
pub mod structured_data;
pub mod theme;

pub use loader::{LoadError, LoadErrorKind, SpecSource, parse_and_validate};
pub use render::{RenderContext, RenderEnv, RenderedNode, RenderedPage, render_page};
pub use spec::{PageSpec, SectionKind, SectionSpec, ValidationError, ValidationErrorKind, validate};
