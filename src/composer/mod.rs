//! Form state for the request being composed.
//!
//! The composer is a plain state struct changed only by applying
//! [`ComposerAction`]s, so there is exactly one place where edits happen.

pub mod action;
pub mod presets;
pub mod state;
pub mod types;

pub use action::ComposerAction;
pub use presets::{Presets, PROXY_PRESETS, QUICK_TEST_URLS};
pub use state::Composer;
pub use types::*;
