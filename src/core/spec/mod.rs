//! Page-spec schema: typed document model and validator

mod error;
mod types;
mod validate;

pub use error::*;
pub use types::*;
pub use validate::*;
