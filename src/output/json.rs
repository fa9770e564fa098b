//! JSON output formatting
//!
//! The document mirrors the tree: `name`, `file_type`, optional `stats`, and
//! `subtree`. Pruning follows the same rule as the text formatter, and child
//! order is taken from the tree as-is.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::tree::{Stats, TreeNode};

use super::config::OutputConfig;

/// File type as it appears in JSON: `"file"` or `"dir"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Dir,
}

/// One node of the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTree {
    pub name: String,
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub subtree: Vec<JsonTree>,
}

/// Build the JSON document for a tree.
pub fn to_json_tree(node: &TreeNode, config: &OutputConfig) -> JsonTree {
    JsonTree {
        name: node.label(config.full_path),
        file_type: if node.is_dir() {
            FileType::Dir
        } else {
            FileType::File
        },
        stats: config.json_stats.then(|| node.stats().clone()),
        subtree: node
            .visible_children(config.prune)
            .map(|child| to_json_tree(child, config))
            .collect(),
    }
}

/// Serialize the document with `config.indent` spaces per level.
pub fn to_json_string(node: &TreeNode, config: &OutputConfig) -> Result<String> {
    let document = to_json_tree(node, config);
    let indent = " ".repeat(config.indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the JSON document followed by a newline.
pub fn write_json<W: Write + ?Sized>(
    node: &TreeNode,
    config: &OutputConfig,
    out: &mut W,
) -> io::Result<()> {
    let json = to_json_string(node, config).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
