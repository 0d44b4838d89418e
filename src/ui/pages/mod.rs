//! Application pages
//!
//! - Preview page (`/` and `/preview`)
//! - Not found page

mod not_found;
mod preview;

pub use not_found::NotFoundPage;
pub use preview::{PreviewPage, PreviewState};
