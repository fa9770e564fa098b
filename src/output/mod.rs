//! Tree formatting and display
//!
//! This module renders a finished `TreeNode` in one of two formats:
//! - Text: an indented glyph tree with an optional count report
//! - JSON: a nested document with `name`, `file_type`, `stats` and `subtree`
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `style` - Color palette handed to the text formatter
//! - `utils` - Connector glyphs and metadata labels
//! - `tree` - Text tree formatter
//! - `json` - JSON document and serialization
//! - `sink` - Output destination (stdout or file)

mod config;
mod json;
mod sink;
mod style;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::{MetadataFields, OutputConfig};
pub use json::{FileType, JsonTree, to_json_string, to_json_tree, write_json};
pub use sink::{OutputSink, STDOUT};
pub use style::{COLOR_NAMES, Palette, Role, parse_color};
pub use tree::TreeFormatter;
pub use utils::{ELBOW, PIPE, TEE, connector, format_time, metadata_prefix};
