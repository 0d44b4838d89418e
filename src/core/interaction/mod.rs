//! Client-side interaction state for interactive sections
//!
//! Each machine is plain data; the UI owns one per mounted section and
//! re-renders from it.

pub mod accordion;
pub mod billing;
pub mod carousel;
pub mod navigation;
pub mod newsletter;

pub use accordion::AccordionState;
pub use billing::{BillingPeriod, BillingToggle};
pub use carousel::{CarouselState, RESUME_COOLDOWN_MS};
pub use navigation::HeaderState;
pub use newsletter::{HONEYPOT_FIELD, NewsletterError, NewsletterState, NewsletterStatus};
