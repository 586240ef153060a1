// Fri Aug 28 2026 - Alex

use crate::frontend::{
    AbiFamily, DeclRef, FrontendError, RecordDecl, RecordId, RecordLayout, TargetInfo,
    TranslationUnit,
};
use std::path::Path;

/// Read-only view of the layout facts a C++ frontend computed for one
/// translation unit. The core runs entirely against this trait, so a
/// synthetic fact provider can stand in for a real compiler in tests.
pub trait RecordProvider {
    fn abi(&self) -> AbiFamily;
    fn target(&self) -> &TargetInfo;

    /// Locator inputs for the main file, in visitation (declaration) order:
    /// record declarations plus variable declarations of record type.
    fn declarations(&self) -> &[DeclRef];

    fn record(&self, id: RecordId) -> Option<&RecordDecl>;

    /// Layout facts; absent for records the frontend never laid out
    /// (incomplete or dependent ones).
    fn layout(&self, id: RecordId) -> Option<&RecordLayout>;
}

/// Runs the external frontend over one file and hands back its facts.
/// `extra_args` are compiler flags forwarded opaquely to the frontend.
pub trait FrontendDriver {
    fn parse(&self, file: &Path, extra_args: &[String]) -> Result<TranslationUnit, FrontendError>;
}
