// Sat Aug 29 2026 - Alex

pub mod json;
pub mod text;

pub use json::{JsonRenderer, OutputError};
pub use text::TextRenderer;
