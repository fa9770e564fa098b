//! Shared helpers for building tree lines

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::tree::{DEFAULT_TIME_FORMAT, TreeNode};

use super::config::MetadataFields;

pub const TEE: &str = "├──";
pub const ELBOW: &str = "└──";
pub const PIPE: &str = "│";
/// Padding after each ancestor column glyph, making columns three wide
pub const COLUMN_PAD: &str = "  ";

/// Connector glyph for a sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { ELBOW } else { TEE }
}

/// Bracketed metadata shown before a node's label, e.g. `[ 1000 100 4096 -rw-r--r-- ]`.
///
/// Fields appear in fixed order: owner, group, size, modification time, permission.
/// Returns `None` when no field is enabled.
pub fn metadata_prefix(
    node: &TreeNode,
    fields: &MetadataFields,
    time_format: &str,
) -> Option<String> {
    if !fields.any() {
        return None;
    }

    let entry = node.entry();
    let stats = node.stats();
    let owner = entry.owner();

    let mut parts = Vec::with_capacity(5);
    if fields.owner {
        if let Some(ids) = owner {
            parts.push(ids.uid.to_string());
        }
    }
    if fields.group {
        if let Some(ids) = owner {
            parts.push(ids.gid.to_string());
        }
    }
    if fields.size {
        parts.push(stats.size.to_string());
    }
    if fields.mod_time {
        parts.push(format_time(&stats.mod_time, time_format));
    }
    if fields.permission {
        parts.push(stats.permission.clone());
    }

    if parts.is_empty() {
        return None;
    }
    Some(format!("[ {} ]", parts.join(" ")))
}

/// Format a timestamp with a strftime string, falling back to the default
/// format when the string holds an invalid specifier.
pub fn format_time(time: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_ok() {
        return out;
    }
    time.format(DEFAULT_TIME_FORMAT).to_string()
}
