// Sat Aug 29 2026 - Alex

use crate::layout::{LayoutNode, LayoutStats};
use serde_json::json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Serializes a layout tree (optionally with its statistics) to JSON.
pub struct JsonRenderer {
    pretty_print: bool,
    include_stats: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_stats: false,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_statistics(mut self) -> Self {
        self.include_stats = true;
        self
    }

    pub fn render(&self, root: &LayoutNode) -> Result<String, OutputError> {
        let mut value = json!({
            "version": env!("CARGO_PKG_VERSION"),
            "type": root.type_name,
            "layout": root,
        });
        if self.include_stats {
            let stats = LayoutStats::collect(root);
            value["statistics"] = serde_json::to_value(&stats)
                .map_err(|e| OutputError::Serialization(e.to_string()))?;
        }

        let rendered = if self.pretty_print {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.map_err(|e| OutputError::Serialization(e.to_string()))
    }

    pub fn save_to_file(&self, root: &LayoutNode, path: &Path) -> Result<(), OutputError> {
        let text = self.render(root)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodeKind;
    use serde_json::Value;

    fn sample_tree() -> LayoutNode {
        let mut root = LayoutNode::new(NodeKind::Root)
            .with_type_name("Widget")
            .with_extent(8, 4);
        root.children.push(
            LayoutNode::new(NodeKind::SimpleField)
                .with_name("x")
                .with_type_name("int")
                .with_offset(0)
                .with_extent(4, 4),
        );
        root
    }

    #[test]
    fn test_render_contains_tree_and_metadata() {
        let text = JsonRenderer::new().render(&sample_tree()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["type"], "Widget");
        assert_eq!(value["layout"]["size"], 8);
        assert_eq!(value["layout"]["children"][0]["name"], "x");
        assert!(value.get("statistics").is_none());
    }

    #[test]
    fn test_statistics_block_is_optional() {
        let text = JsonRenderer::new()
            .with_statistics()
            .render(&sample_tree())
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["statistics"]["total_size"], 8);
        assert_eq!(value["statistics"]["covered_bytes"], 4);
    }

    #[test]
    fn test_layout_round_trips_through_json() {
        let tree = sample_tree();
        let text = JsonRenderer::new().render(&tree).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let back: LayoutNode = serde_json::from_value(value["layout"].clone()).unwrap();

        assert_eq!(back, tree);
    }

    #[test]
    fn test_save_to_file() {
        let path = std::env::temp_dir().join(format!(
            "cpp-layout-inspector-out-{}.json",
            std::process::id()
        ));
        JsonRenderer::new()
            .with_pretty_print(false)
            .save_to_file(&sample_tree(), &path)
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Widget\""));
        std::fs::remove_file(&path).ok();
    }
}
