// Sat Aug 29 2026 - Alex

use crate::layout::{LayoutNode, NodeKind};
use colored::Colorize;
use std::fmt::Write;

/// Renders a layout tree as an indented text listing, one node per line,
/// in append order. Offsets are relative to the enclosing node, exactly as
/// stored in the tree.
pub struct TextRenderer {
    use_color: bool,
    indent: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            use_color: true,
            indent: 2,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn render(&self, root: &LayoutNode) -> String {
        let mut out = String::new();
        let header = format!(
            "{} — {} bytes, align {}",
            root.type_name, root.size, root.align
        );
        if self.use_color {
            let _ = writeln!(out, "{}", header.cyan().bold());
        } else {
            let _ = writeln!(out, "{}", header);
        }
        for child in &root.children {
            self.render_node(child, 1, &mut out);
        }
        out
    }

    fn render_node(&self, node: &LayoutNode, depth: usize, out: &mut String) {
        let pad = " ".repeat(depth * self.indent);

        if node.kind == NodeKind::BitfieldRun {
            let line = format!("bits {}..{}", node.offset, node.offset + node.size);
            let _ = writeln!(out, "{}        {}", pad, self.paint(&line, node.kind));
            return;
        }

        let mut desc = String::new();
        match node.kind {
            NodeKind::SimpleField | NodeKind::ComplexField | NodeKind::Bitfield => {
                let _ = write!(desc, "{} {}", node.type_name, node.name);
            }
            _ => {
                let _ = write!(desc, "{}", node.kind.label());
                if !node.type_name.is_empty() {
                    let _ = write!(desc, " {}", node.type_name);
                }
            }
        }

        let offset = format!("0x{:04X}", node.offset);
        let extent = format!("{} bytes, align {}", node.size, node.align);
        let _ = writeln!(
            out,
            "{}{}  {}  ({})",
            pad,
            self.paint_offset(&offset),
            self.paint(&desc, node.kind),
            extent
        );

        for child in &node.children {
            self.render_node(child, depth + 1, out);
        }
    }

    fn paint_offset(&self, text: &str) -> String {
        if self.use_color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, kind: NodeKind) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if kind.is_synthetic() {
            text.yellow().to_string()
        } else if kind.is_base() {
            text.magenta().to_string()
        } else {
            text.green().to_string()
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
