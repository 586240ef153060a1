// Fri Aug 28 2026 - Alex

pub mod error;
pub mod facts;
pub mod json;
pub mod traits;
pub mod translation_unit;

pub use error::FrontendError;
pub use facts::{
    AbiFamily, BaseSpec, DeclRef, FieldFacts, FieldType, RecordDecl, RecordId, RecordKind,
    RecordLayout, TargetInfo, VBaseLayout,
};
pub use json::JsonFrontend;
pub use traits::{FrontendDriver, RecordProvider};
pub use translation_unit::{TranslationUnit, TranslationUnitBuilder};
