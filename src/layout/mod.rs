// Thu Aug 27 2026 - Alex

pub mod node;
pub mod stats;

pub use node::{LayoutNode, NodeKind};
pub use stats::LayoutStats;
