// Thu Aug 27 2026 - Alex

pub mod builder;
pub mod config;
pub mod frontend;
pub mod layout;
pub mod locator;
pub mod output;
pub mod query;

pub use builder::LayoutTreeBuilder;
pub use config::{Config, OutputFormat};
pub use frontend::{
    AbiFamily, FrontendDriver, FrontendError, JsonFrontend, RecordProvider, TranslationUnit,
    TranslationUnitBuilder,
};
pub use layout::{LayoutNode, LayoutStats, NodeKind};
pub use locator::{DeclarationLocator, SourcePos, SourceRange};
pub use output::{JsonRenderer, TextRenderer};
pub use query::{QueryEngine, QueryError, QueryOutcome, QueryRequest};
