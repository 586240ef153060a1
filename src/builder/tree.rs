// Sat Aug 29 2026 - Alex

use crate::frontend::{FieldType, RecordDecl, RecordId, RecordLayout, RecordProvider};
use crate::layout::{LayoutNode, NodeKind};
use log::debug;

const VTORDISP_BYTES: u64 = 4;

/// Recursively assembles a layout tree from the frontend's ABI facts.
///
/// Children are appended in a fixed block order: header pointer, non-virtual
/// bases (ascending by offset, declaration order on ties), fields in
/// declaration order, then virtual bases in declaration order. Virtual bases
/// are emitted once per complete object only; every base recursion passes
/// `include_virtual_bases = false` so the shared region is never duplicated.
///
/// Preconditions (a dependent base or a record without layout facts reaching
/// this builder) are programming errors and abort via panic; the locator
/// guarantees they never occur for located declarations.
pub struct LayoutTreeBuilder<'a, P: RecordProvider> {
    provider: &'a P,
}

impl<'a, P: RecordProvider> LayoutTreeBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Builds the complete-object layout for `id`, virtual bases included.
    pub fn build(&self, id: RecordId) -> LayoutNode {
        self.build_record(id, true)
    }

    fn build_record(&self, id: RecordId, include_virtual_bases: bool) -> LayoutNode {
        let decl = self
            .provider
            .record(id)
            .unwrap_or_else(|| panic!("no declaration facts for {}", id));
        let layout = self
            .provider
            .layout(id)
            .unwrap_or_else(|| panic!("no layout facts for {}", decl.qualified_name));

        debug!(
            "building {} (virtual bases: {})",
            decl.qualified_name, include_virtual_bases
        );

        let mut node = LayoutNode::new(NodeKind::Root)
            .with_type_name(&decl.qualified_name)
            .with_extent(layout.size, layout.align);

        self.append_header_pointer(&mut node, decl, layout);
        self.append_non_virtual_bases(&mut node, decl, layout);
        self.append_vbptr(&mut node, layout);
        self.append_fields(&mut node, decl);
        if include_virtual_bases {
            self.append_virtual_bases(&mut node, decl, layout);
        }

        node
    }

    fn pointer_node(&self, kind: NodeKind, offset: u64) -> LayoutNode {
        let target = self.provider.target();
        LayoutNode::new(kind)
            .with_offset(offset)
            .with_extent(target.pointer_width, target.pointer_align)
    }

    /// At most one of VTablePtr/VFTablePtr, reflecting the two ABI
    /// families: a shared trailing vtable pointer (Itanium, only when no
    /// primary base already carries it) or a per-record vftable pointer
    /// (Microsoft).
    fn append_header_pointer(&self, node: &mut LayoutNode, decl: &RecordDecl, layout: &RecordLayout) {
        if decl.has_virtual_functions
            && layout.primary_base.is_none()
            && !self.provider.abi().is_microsoft()
        {
            node.children.push(self.pointer_node(NodeKind::VTablePtr, 0));
        } else if layout.has_own_vfptr {
            node.children.push(self.pointer_node(NodeKind::VFTablePtr, 0));
        }
    }

    fn append_non_virtual_bases(
        &self,
        node: &mut LayoutNode,
        decl: &RecordDecl,
        layout: &RecordLayout,
    ) {
        let mut bases: Vec<(RecordId, u64)> = Vec::new();
        for base in &decl.bases {
            let record = base.record.unwrap_or_else(|| {
                panic!(
                    "cannot lay out {} with a dependent base",
                    decl.qualified_name
                )
            });
            if base.is_virtual {
                continue;
            }
            let offset = layout.base_offset(record).unwrap_or_else(|| {
                panic!(
                    "no base offset for {} in {}",
                    record, decl.qualified_name
                )
            });
            bases.push((record, offset));
        }

        // Stable: empty bases sharing an offset keep declaration order.
        bases.sort_by_key(|&(_, offset)| offset);

        for (record, offset) in bases {
            let mut base_node = self.build_record(record, false);
            base_node.offset = offset;
            base_node.kind = if layout.primary_base == Some(record) {
                NodeKind::NvPrimaryBase
            } else {
                NodeKind::NvBase
            };
            node.children.push(base_node);
        }
    }

    fn append_vbptr(&self, node: &mut LayoutNode, layout: &RecordLayout) {
        if let Some(offset) = layout.vbptr_offset {
            node.children
                .push(self.pointer_node(NodeKind::VBTablePtr, offset));
        }
    }

    fn append_fields(&self, node: &mut LayoutNode, decl: &RecordDecl) {
        for field in &decl.fields {
            let byte_offset = field.bit_offset / 8;

            match &field.type_info {
                FieldType::Record(record) => {
                    let mut field_node = self.build_record(*record, true);
                    field_node.kind = NodeKind::ComplexField;
                    field_node.name = field.name.clone();
                    field_node.type_name = field.type_name.clone();
                    field_node.offset = byte_offset;
                    node.children.push(field_node);
                }
                FieldType::Scalar {
                    size,
                    align,
                    bit_width: Some(bit_width),
                } => {
                    let mut field_node = LayoutNode::new(NodeKind::Bitfield)
                        .with_name(&field.name)
                        .with_type_name(&field.type_name)
                        .with_offset(byte_offset)
                        .with_extent(*size, *align);
                    field_node.children.push(
                        LayoutNode::new(NodeKind::BitfieldRun)
                            .with_offset(field.bit_offset - byte_offset * 8)
                            .with_extent(*bit_width, 0),
                    );
                    node.children.push(field_node);
                }
                FieldType::Scalar {
                    size,
                    align,
                    bit_width: None,
                } => {
                    node.children.push(
                        LayoutNode::new(NodeKind::SimpleField)
                            .with_name(&field.name)
                            .with_type_name(&field.type_name)
                            .with_offset(byte_offset)
                            .with_extent(*size, *align),
                    );
                }
            }
        }
    }

    fn append_virtual_bases(&self, node: &mut LayoutNode, decl: &RecordDecl, layout: &RecordLayout) {
        for &record in &decl.virtual_bases {
            let vbase = layout.virtual_base(record).unwrap_or_else(|| {
                panic!(
                    "no virtual base placement for {} in {}",
                    record, decl.qualified_name
                )
            });

            if vbase.needs_vtordisp {
                let offset = vbase.offset.checked_sub(VTORDISP_BYTES).unwrap_or_else(|| {
                    panic!(
                        "vtordisp slot before start of {}",
                        decl.qualified_name
                    )
                });
                node.children.push(
                    LayoutNode::new(NodeKind::VtorDisp)
                        .with_offset(offset)
                        .with_extent(VTORDISP_BYTES, VTORDISP_BYTES),
                );
            }

            let mut base_node = self.build_record(record, false);
            base_node.offset = vbase.offset;
            base_node.kind = if layout.primary_base == Some(record) {
                NodeKind::VirtualPrimaryBase
            } else {
                NodeKind::VirtualBase
            };
            node.children.push(base_node);
        }
    }
}
