// Fri Aug 28 2026 - Alex

use crate::frontend::{
    AbiFamily, DeclRef, FrontendError, RecordDecl, RecordId, RecordLayout, RecordProvider,
    TargetInfo,
};
use crate::locator::SourceRange;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owned store of everything the frontend reported about one translation
/// unit. Record tables keep declaration order, which the locator and the
/// dump format both rely on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub file: String,
    pub abi: AbiFamily,
    #[serde(default)]
    pub target: TargetInfo,
    records: IndexMap<RecordId, RecordDecl>,
    layouts: IndexMap<RecordId, RecordLayout>,
    declarations: Vec<DeclRef>,
}

impl TranslationUnit {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordDecl> {
        self.records.values()
    }

    /// Consistency check over the fact tables: every declaration, base,
    /// field and virtual-base reference must resolve to a known record.
    pub fn validate(&self) -> Result<(), FrontendError> {
        let check = |id: RecordId, what: &str| -> Result<(), FrontendError> {
            if self.records.contains_key(&id) {
                Ok(())
            } else {
                Err(FrontendError::MalformedUnit(format!(
                    "{} refers to unknown {}",
                    what, id
                )))
            }
        };

        for decl_ref in &self.declarations {
            check(decl_ref.record, "declaration")?;
        }
        for decl in self.records.values() {
            for base in &decl.bases {
                if let Some(id) = base.record {
                    check(id, &format!("base of {}", decl.qualified_name))?;
                }
            }
            for &id in &decl.virtual_bases {
                check(id, &format!("virtual base of {}", decl.qualified_name))?;
            }
        }
        Ok(())
    }
}

impl RecordProvider for TranslationUnit {
    fn abi(&self) -> AbiFamily {
        self.abi
    }

    fn target(&self) -> &TargetInfo {
        &self.target
    }

    fn declarations(&self) -> &[DeclRef] {
        &self.declarations
    }

    fn record(&self, id: RecordId) -> Option<&RecordDecl> {
        self.records.get(&id)
    }

    fn layout(&self, id: RecordId) -> Option<&RecordLayout> {
        self.layouts.get(&id)
    }
}

/// Assembles a `TranslationUnit` fact by fact. Tests and demos use this as
/// their synthetic frontend; a real driver would fill the same tables from
/// compiler output.
pub struct TranslationUnitBuilder {
    unit: TranslationUnit,
    next_id: u32,
}

impl TranslationUnitBuilder {
    pub fn new(file: &str) -> Self {
        Self {
            unit: TranslationUnit {
                file: file.to_string(),
                ..TranslationUnit::default()
            },
            next_id: 0,
        }
    }

    pub fn with_abi(mut self, abi: AbiFamily) -> Self {
        self.unit.abi = abi;
        self
    }

    pub fn with_target(mut self, pointer_width: u64, pointer_align: u64) -> Self {
        self.unit.target = TargetInfo {
            pointer_width,
            pointer_align,
        };
        self
    }

    /// Reserves a record id before its facts exist, so bases can point at
    /// records defined later.
    pub fn allocate(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a record's facts and its own declaration range as a
    /// locator input.
    pub fn define(&mut self, decl: RecordDecl, layout: Option<RecordLayout>) -> RecordId {
        let id = decl.id;
        self.unit.declarations.push(DeclRef::new(id, decl.range));
        if let Some(layout) = layout {
            self.unit.layouts.insert(id, layout);
        }
        self.unit.records.insert(id, decl);
        id
    }

    /// Registers a record's facts without a locator entry (e.g. a record
    /// declared in a header outside the main file).
    pub fn define_external(&mut self, decl: RecordDecl, layout: Option<RecordLayout>) -> RecordId {
        let id = decl.id;
        if let Some(layout) = layout {
            self.unit.layouts.insert(id, layout);
        }
        self.unit.records.insert(id, decl);
        id
    }

    /// Adds a variable declaration of record type as a locator input.
    pub fn declare_var(&mut self, record: RecordId, range: SourceRange) {
        self.unit.declarations.push(DeclRef::new(record, range));
    }

    pub fn finish(self) -> TranslationUnit {
        self.unit
    }
}
