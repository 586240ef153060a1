// Thu Aug 27 2026 - Alex

use crate::layout::{LayoutNode, NodeKind};
use serde::Serialize;

/// Byte-coverage summary for a layout tree: which parts of the object image
/// are occupied by leaves and where the padding holes are.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutStats {
    pub node_count: usize,
    pub total_size: u64,
    pub covered_bytes: u64,
    /// Padding holes as (offset, size) pairs, ascending by offset.
    pub padding: Vec<(u64, u64)>,
}

impl LayoutStats {
    pub fn collect(root: &LayoutNode) -> Self {
        let mut spans = Vec::new();
        collect_leaf_spans(root, 0, &mut spans);
        spans.sort_by_key(|&(offset, _)| offset);

        let mut padding = Vec::new();
        let mut covered = 0u64;
        let mut expected = 0u64;
        for &(offset, size) in &spans {
            if offset > expected {
                padding.push((expected, offset - expected));
            }
            let end = offset + size;
            // Overlapping spans (bitfields sharing a storage unit, primary
            // bases at offset 0) only count once.
            if end > expected {
                covered += end - expected.max(offset);
                expected = end;
            }
        }

        if expected < root.size {
            padding.push((expected, root.size - expected));
        }

        Self {
            node_count: root.node_count(),
            total_size: root.size,
            covered_bytes: covered,
            padding,
        }
    }

    pub fn total_padding(&self) -> u64 {
        self.padding.iter().map(|&(_, size)| size).sum()
    }

    pub fn padding_percentage(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }
        (self.total_padding() as f64 / self.total_size as f64) * 100.0
    }
}

/// Flattens the tree into absolute byte spans. Bitfield runs are bit-level
/// detail and contribute through their parent `Bitfield` node instead.
fn collect_leaf_spans(node: &LayoutNode, base: u64, spans: &mut Vec<(u64, u64)>) {
    for child in &node.children {
        match child.kind {
            NodeKind::BitfieldRun => {}
            _ if child.children.is_empty() || child.kind == NodeKind::Bitfield => {
                if child.size > 0 {
                    spans.push((base + child.offset, child.size));
                }
            }
            _ => collect_leaf_spans(child, base + child.offset, spans),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutNode;

    fn field(name: &str, offset: u64, size: u64) -> LayoutNode {
        LayoutNode::new(NodeKind::SimpleField)
            .with_name(name)
            .with_offset(offset)
            .with_extent(size, size)
    }

    #[test]
    fn test_detects_interior_and_tail_padding() {
        let mut root = LayoutNode::new(NodeKind::Root).with_extent(16, 8);
        root.children.push(field("a", 0, 1));
        root.children.push(field("b", 8, 4));

        let stats = LayoutStats::collect(&root);
        assert_eq!(stats.padding, vec![(1, 7), (12, 4)]);
        assert_eq!(stats.total_padding(), 11);
        assert_eq!(stats.covered_bytes, 5);
    }

    #[test]
    fn test_shared_bitfield_byte_counts_once() {
        let mut root = LayoutNode::new(NodeKind::Root).with_extent(4, 4);
        for (name, bit) in [("a", 0u64), ("b", 3u64)] {
            let mut bf = LayoutNode::new(NodeKind::Bitfield)
                .with_name(name)
                .with_offset(0)
                .with_extent(4, 4);
            bf.children.push(
                LayoutNode::new(NodeKind::BitfieldRun)
                    .with_offset(bit)
                    .with_extent(3, 0),
            );
            root.children.push(bf);
        }

        let stats = LayoutStats::collect(&root);
        assert_eq!(stats.covered_bytes, 4);
        assert!(stats.padding.is_empty());
    }

    #[test]
    fn test_recurses_into_base_subobjects() {
        let mut base = LayoutNode::new(NodeKind::NvBase).with_extent(8, 8);
        base.children.push(field("x", 0, 4));
        let mut root = LayoutNode::new(NodeKind::Root).with_extent(16, 8);
        base.offset = 0;
        root.children.push(base);
        root.children.push(field("y", 8, 4));

        let stats = LayoutStats::collect(&root);
        assert_eq!(stats.covered_bytes, 8);
        assert_eq!(stats.padding, vec![(4, 4), (12, 4)]);
    }

    #[test]
    fn test_empty_type_has_no_padding() {
        let root = LayoutNode::new(NodeKind::Root).with_extent(0, 1);
        let stats = LayoutStats::collect(&root);
        assert_eq!(stats.total_padding(), 0);
        assert_eq!(stats.padding_percentage(), 0.0);
    }

    #[test]
    fn test_padding_percentage() {
        let mut root = LayoutNode::new(NodeKind::Root).with_extent(8, 8);
        root.children.push(field("a", 0, 4));
        let stats = LayoutStats::collect(&root);
        assert!((stats.padding_percentage() - 50.0).abs() < f64::EPSILON);
    }
}
