// Thu Aug 27 2026 - Alex

pub mod locator;
pub mod position;

pub use locator::DeclarationLocator;
pub use position::{SourcePos, SourceRange};
