// Thu Aug 27 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a layout node physically represents inside the object image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    SimpleField,
    ComplexField,
    Bitfield,
    BitfieldRun,
    VTablePtr,
    VFTablePtr,
    VBTablePtr,
    NvBase,
    NvPrimaryBase,
    VirtualBase,
    VirtualPrimaryBase,
    VtorDisp,
}

impl NodeKind {
    pub fn is_base(self) -> bool {
        matches!(
            self,
            NodeKind::NvBase
                | NodeKind::NvPrimaryBase
                | NodeKind::VirtualBase
                | NodeKind::VirtualPrimaryBase
        )
    }

    pub fn is_primary_base(self) -> bool {
        matches!(self, NodeKind::NvPrimaryBase | NodeKind::VirtualPrimaryBase)
    }

    pub fn is_field(self) -> bool {
        matches!(
            self,
            NodeKind::SimpleField | NodeKind::ComplexField | NodeKind::Bitfield
        )
    }

    /// Synthetic nodes carry no declared name or type.
    pub fn is_synthetic(self) -> bool {
        matches!(
            self,
            NodeKind::BitfieldRun
                | NodeKind::VTablePtr
                | NodeKind::VFTablePtr
                | NodeKind::VBTablePtr
                | NodeKind::VtorDisp
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::SimpleField => "field",
            NodeKind::ComplexField => "field",
            NodeKind::Bitfield => "bitfield",
            NodeKind::BitfieldRun => "bits",
            NodeKind::VTablePtr => "vtable pointer",
            NodeKind::VFTablePtr => "vftable pointer",
            NodeKind::VBTablePtr => "vbtable pointer",
            NodeKind::NvBase => "base",
            NodeKind::NvPrimaryBase => "primary base",
            NodeKind::VirtualBase => "virtual base",
            NodeKind::VirtualPrimaryBase => "virtual primary base",
            NodeKind::VtorDisp => "vtordisp",
        }
    }
}

/// One physically addressable or structurally significant element of a
/// type's memory image. Each parent exclusively owns its children, so the
/// whole tree tears down with a single drop.
///
/// `offset`, `size` and `align` are byte quantities, with one exception:
/// the `BitfieldRun` child of a `Bitfield` stores a bit offset relative to
/// its parent's byte offset and a bit width in `size`.
///
/// Children are appended in four blocks (header pointers, non-virtual
/// bases, fields, virtual bases) and are never re-sorted globally, so
/// offsets are not monotonic across the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub name: String,
    pub type_name: String,
    pub offset: u64,
    pub size: u64,
    pub align: u64,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: String::new(),
            type_name: String::new(),
            offset: 0,
            size: 0,
            align: 0,
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_type_name(mut self, type_name: &str) -> Self {
        self.type_name = type_name.to_string();
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_extent(mut self, size: u64, align: u64) -> Self {
        self.size = size;
        self.align = align;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// First direct child with the given declared name.
    pub fn find_child(&self, name: &str) -> Option<&LayoutNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children of the given kind, in append order.
    pub fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &LayoutNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}

impl fmt::Display for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == NodeKind::BitfieldRun {
            return write!(f, "bits {}..{}", self.offset, self.offset + self.size);
        }

        write!(f, "{}", self.kind.label())?;
        if !self.type_name.is_empty() {
            write!(f, " {}", self.type_name)?;
        }
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        write!(
            f,
            " @ 0x{:X} ({} bytes, align {})",
            self.offset, self.size, self.align
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder_setters() {
        let node = LayoutNode::new(NodeKind::SimpleField)
            .with_name("count")
            .with_type_name("unsigned int")
            .with_offset(8)
            .with_extent(4, 4);

        assert_eq!(node.kind, NodeKind::SimpleField);
        assert_eq!(node.name, "count");
        assert_eq!(node.type_name, "unsigned int");
        assert_eq!(node.offset, 8);
        assert_eq!(node.size, 4);
        assert_eq!(node.align, 4);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_node_count_is_recursive() {
        let mut root = LayoutNode::new(NodeKind::Root);
        let mut base = LayoutNode::new(NodeKind::NvBase);
        base.children.push(LayoutNode::new(NodeKind::SimpleField));
        root.children.push(base);
        root.children.push(LayoutNode::new(NodeKind::SimpleField));

        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NodeKind::NvPrimaryBase.is_base());
        assert!(NodeKind::NvPrimaryBase.is_primary_base());
        assert!(!NodeKind::VirtualBase.is_primary_base());
        assert!(NodeKind::VTablePtr.is_synthetic());
        assert!(NodeKind::Bitfield.is_field());
        assert!(!NodeKind::Bitfield.is_synthetic());
    }

    #[test]
    fn test_display_bitfield_run() {
        let run = LayoutNode::new(NodeKind::BitfieldRun)
            .with_offset(3)
            .with_extent(5, 0);
        assert_eq!(format!("{}", run), "bits 3..8");
    }

    #[test]
    fn test_display_field() {
        let node = LayoutNode::new(NodeKind::SimpleField)
            .with_name("x")
            .with_type_name("int")
            .with_offset(16)
            .with_extent(4, 4);
        assert_eq!(format!("{}", node), "field int x @ 0x10 (4 bytes, align 4)");
    }

    #[test]
    fn test_find_child_by_name() {
        let mut root = LayoutNode::new(NodeKind::Root);
        root.children
            .push(LayoutNode::new(NodeKind::SimpleField).with_name("a"));
        root.children
            .push(LayoutNode::new(NodeKind::SimpleField).with_name("b"));

        assert!(root.find_child("b").is_some());
        assert!(root.find_child("c").is_none());
    }
}
