//! Small utilities shared by the dispatcher and the renderer.

pub mod status_text;
pub mod timing;

pub use status_text::status_text;
pub use timing::Stopwatch;
