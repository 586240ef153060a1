// Fri Aug 28 2026 - Alex

use crate::locator::SourceRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a record inside its translation unit's record table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Class,
    Struct,
    Union,
    Other,
}

impl RecordKind {
    /// Only classes and structs are eligible for layout queries.
    pub fn is_layoutable(self) -> bool {
        matches!(self, RecordKind::Class | RecordKind::Struct)
    }
}

/// The binary convention governing object layout. Microsoft targets place a
/// vftable pointer per subobject and use vbtable pointers plus vtordisp
/// slots for virtual bases; Itanium targets share a single trailing vtable
/// pointer through the primary base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbiFamily {
    #[default]
    Itanium,
    Microsoft,
}

impl AbiFamily {
    pub fn is_microsoft(self) -> bool {
        self == AbiFamily::Microsoft
    }
}

/// Pointer width and alignment of the compilation target, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub pointer_width: u64,
    pub pointer_align: u64,
}

impl Default for TargetInfo {
    fn default() -> Self {
        Self {
            pointer_width: 8,
            pointer_align: 8,
        }
    }
}

/// One direct base specifier. `record` is `None` when the base type is
/// dependent and could not be resolved; such a declaration must never reach
/// the layout builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSpec {
    pub record: Option<RecordId>,
    pub is_virtual: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    /// Field of class/struct type, laid out as a nested subobject.
    Record(RecordId),
    /// Scalar field; `bit_width` is set for bitfield members and never
    /// exceeds `size * 8`.
    Scalar {
        size: u64,
        align: u64,
        #[serde(default)]
        bit_width: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFacts {
    pub name: String,
    pub type_name: String,
    /// Offset from the start of the record, in bits.
    pub bit_offset: u64,
    pub type_info: FieldType,
}

impl FieldFacts {
    pub fn scalar(name: &str, type_name: &str, byte_offset: u64, size: u64, align: u64) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            bit_offset: byte_offset * 8,
            type_info: FieldType::Scalar {
                size,
                align,
                bit_width: None,
            },
        }
    }

    pub fn bitfield(
        name: &str,
        type_name: &str,
        bit_offset: u64,
        size: u64,
        align: u64,
        bit_width: u64,
    ) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            bit_offset,
            type_info: FieldType::Scalar {
                size,
                align,
                bit_width: Some(bit_width),
            },
        }
    }

    pub fn record(name: &str, type_name: &str, byte_offset: u64, record: RecordId) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            bit_offset: byte_offset * 8,
            type_info: FieldType::Record(record),
        }
    }
}

/// Declaration-side facts about one record, as reported by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDecl {
    pub id: RecordId,
    pub qualified_name: String,
    pub kind: RecordKind,
    pub is_dependent: bool,
    pub is_complete: bool,
    pub is_invalid: bool,
    pub has_virtual_functions: bool,
    pub range: SourceRange,
    /// Direct bases in declaration order.
    pub bases: Vec<BaseSpec>,
    /// All virtual bases of the complete object (direct and inherited),
    /// deduplicated, in declaration order.
    pub virtual_bases: Vec<RecordId>,
    /// Fields in declaration order.
    pub fields: Vec<FieldFacts>,
}

impl RecordDecl {
    pub fn new(id: RecordId, qualified_name: &str, kind: RecordKind, range: SourceRange) -> Self {
        Self {
            id,
            qualified_name: qualified_name.to_string(),
            kind,
            is_dependent: false,
            is_complete: true,
            is_invalid: false,
            has_virtual_functions: false,
            range,
            bases: Vec::new(),
            virtual_bases: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_dependent(mut self) -> Self {
        self.is_dependent = true;
        self
    }

    pub fn with_incomplete(mut self) -> Self {
        self.is_complete = false;
        self
    }

    pub fn with_invalid(mut self) -> Self {
        self.is_invalid = true;
        self
    }

    pub fn with_virtual_functions(mut self) -> Self {
        self.has_virtual_functions = true;
        self
    }

    pub fn with_base(mut self, record: RecordId) -> Self {
        self.bases.push(BaseSpec {
            record: Some(record),
            is_virtual: false,
        });
        self
    }

    /// Direct virtual base: recorded both as a base specifier and in the
    /// complete-object virtual base list.
    pub fn with_virtual_base(mut self, record: RecordId) -> Self {
        self.bases.push(BaseSpec {
            record: Some(record),
            is_virtual: true,
        });
        self.virtual_bases.push(record);
        self
    }

    /// Virtual base inherited through a non-virtual path; it appears only
    /// in the complete-object list.
    pub fn with_indirect_virtual_base(mut self, record: RecordId) -> Self {
        self.virtual_bases.push(record);
        self
    }

    pub fn with_dependent_base(mut self) -> Self {
        self.bases.push(BaseSpec {
            record: None,
            is_virtual: false,
        });
        self
    }

    pub fn with_field(mut self, field: FieldFacts) -> Self {
        self.fields.push(field);
        self
    }
}

/// Per-virtual-base placement inside a complete object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VBaseLayout {
    pub record: RecordId,
    pub offset: u64,
    /// Whether the ABI requires an adjustor (vtordisp) slot just before
    /// this base.
    pub needs_vtordisp: bool,
}

/// Layout-side facts about one record: everything the target ABI computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordLayout {
    pub size: u64,
    pub align: u64,
    pub primary_base: Option<RecordId>,
    /// Microsoft ABI: this record introduces its own vftable pointer.
    pub has_own_vfptr: bool,
    /// Microsoft ABI: offset of this record's own vbtable pointer.
    pub vbptr_offset: Option<u64>,
    /// Byte offsets of non-virtual base subobjects.
    pub base_offsets: Vec<(RecordId, u64)>,
    pub virtual_bases: Vec<VBaseLayout>,
}

impl RecordLayout {
    pub fn new(size: u64, align: u64) -> Self {
        Self {
            size,
            align,
            primary_base: None,
            has_own_vfptr: false,
            vbptr_offset: None,
            base_offsets: Vec::new(),
            virtual_bases: Vec::new(),
        }
    }

    pub fn with_primary_base(mut self, record: RecordId) -> Self {
        self.primary_base = Some(record);
        self
    }

    pub fn with_own_vfptr(mut self) -> Self {
        self.has_own_vfptr = true;
        self
    }

    pub fn with_vbptr(mut self, offset: u64) -> Self {
        self.vbptr_offset = Some(offset);
        self
    }

    pub fn with_base_offset(mut self, record: RecordId, offset: u64) -> Self {
        self.base_offsets.push((record, offset));
        self
    }

    pub fn with_virtual_base(mut self, record: RecordId, offset: u64, needs_vtordisp: bool) -> Self {
        self.virtual_bases.push(VBaseLayout {
            record,
            offset,
            needs_vtordisp,
        });
        self
    }

    pub fn base_offset(&self, record: RecordId) -> Option<u64> {
        self.base_offsets
            .iter()
            .find(|&&(id, _)| id == record)
            .map(|&(_, offset)| offset)
    }

    pub fn virtual_base(&self, record: RecordId) -> Option<&VBaseLayout> {
        self.virtual_bases.iter().find(|vb| vb.record == record)
    }
}

/// One locator input: a record declaration's own range, or a variable
/// declaration's range referencing the record it is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclRef {
    pub record: RecordId,
    pub range: SourceRange,
}

impl DeclRef {
    pub fn new(record: RecordId, range: SourceRange) -> Self {
        Self { record, range }
    }
}
