// Fri Aug 28 2026 - Alex

use crate::frontend::{RecordDecl, RecordId, RecordProvider};
use crate::locator::SourcePos;
use log::{debug, info};

/// Finds the most specific class/struct declaration at a cursor position:
/// the candidate whose source range contains the position and whose start
/// is lexicographically greatest, i.e. the innermost enclosing declaration.
pub struct DeclarationLocator {
    position: SourcePos,
}

impl DeclarationLocator {
    pub fn new(position: SourcePos) -> Self {
        Self { position }
    }

    pub fn locate<P: RecordProvider>(&self, provider: &P) -> Option<RecordId> {
        let mut best: Option<(RecordId, SourcePos)> = None;

        for decl_ref in provider.declarations() {
            let Some(record) = provider.record(decl_ref.record) else {
                continue;
            };
            if !Self::is_candidate(record) {
                continue;
            }
            if !decl_ref.range.contains(self.position) {
                continue;
            }

            debug!(
                "candidate {} at {}",
                record.qualified_name, decl_ref.range
            );

            // Equal starts keep the later visit, so declaration order
            // breaks the tie deterministically.
            let replace = match best {
                Some((_, best_start)) => decl_ref.range.start >= best_start,
                None => true,
            };
            if replace {
                best = Some((decl_ref.record, decl_ref.range.start));
            }
        }

        match best {
            Some((id, _)) => {
                info!("located {} at {}", id, self.position);
                Some(id)
            }
            None => {
                info!("no declaration at {}", self.position);
                None
            }
        }
    }

    /// A declaration qualifies only when the frontend fully resolved it:
    /// class or struct kind, non-dependent, complete and valid.
    fn is_candidate(record: &RecordDecl) -> bool {
        record.kind.is_layoutable()
            && !record.is_dependent
            && record.is_complete
            && !record.is_invalid
    }
}
