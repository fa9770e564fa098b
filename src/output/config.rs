//! Output configuration types

use crate::tree::{DEFAULT_INDENT, DEFAULT_TIME_FORMAT, Options};

use super::style::Palette;

/// Which metadata fields are printed before each node label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataFields {
    pub owner: bool,
    pub group: bool,
    pub size: bool,
    pub mod_time: bool,
    pub permission: bool,
}

impl MetadataFields {
    pub fn any(&self) -> bool {
        self.owner || self.group || self.size || self.mod_time || self.permission
    }
}

/// Configuration shared by the text and JSON renderers.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub full_path: bool,
    pub no_report: bool,
    pub prune: bool,
    pub fields: MetadataFields,
    /// strftime format for modification times
    pub time_format: String,
    /// Include the stats record in JSON output
    pub json_stats: bool,
    /// JSON indent width in spaces
    pub indent: usize,
    pub palette: Palette,
}

impl OutputConfig {
    /// Take the rendering switches out of walk options.
    pub fn from_options(options: &Options, palette: Palette) -> Self {
        Self {
            full_path: options.full_path,
            no_report: options.no_report,
            prune: options.prune,
            fields: MetadataFields {
                owner: options.print_owner,
                group: options.print_group,
                size: options.print_size,
                mod_time: options.print_mod_time,
                permission: options.print_permission,
            },
            time_format: options.time_format.clone(),
            json_stats: options.json_stats,
            indent: options.indent,
            palette,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            full_path: false,
            no_report: false,
            prune: false,
            fields: MetadataFields::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            json_stats: false,
            indent: DEFAULT_INDENT,
            palette: Palette::plain(),
        }
    }
}
