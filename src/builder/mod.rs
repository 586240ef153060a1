// Sat Aug 29 2026 - Alex

pub mod tree;

pub use tree::LayoutTreeBuilder;
