//! Configuration types for tree walking and rendering

/// How siblings are ordered within a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by name
    #[default]
    Name,
    /// Descending by name
    NameReverse,
    /// Ascending by modification time, in whole seconds
    ModTime,
}

/// Every traversal and rendering switch.
///
/// Passed by reference down the whole pipeline and never changed mid-walk.
#[derive(Debug, Clone)]
pub struct Options {
    pub include_hidden: bool,
    pub dirs_only: bool,
    pub full_path: bool,
    pub no_report: bool,
    pub follow_links: bool,
    pub prune: bool,
    pub sort: SortOrder,
    pub print_owner: bool,
    pub print_group: bool,
    pub print_size: bool,
    pub print_permission: bool,
    pub print_mod_time: bool,
    /// Include each node's stats record in JSON output
    pub json_stats: bool,
    /// Descend at most this many levels below the root. `None` = unlimited
    pub max_level: Option<usize>,
    /// Directories with more raw entries than this are listed without children
    pub file_limit: Option<usize>,
    /// JSON indent width in spaces
    pub indent: usize,
    /// strftime format for modification times
    pub time_format: String,
    pub include_pattern: Option<String>,
    pub exclude_pattern: Option<String>,
}

pub const DEFAULT_TIME_FORMAT: &str = "%b %e %H:%M";
pub const DEFAULT_INDENT: usize = 2;

impl Options {
    /// Whether children of a directory at `level` may be visited.
    pub fn descends_from(&self, level: usize) -> bool {
        self.max_level.is_none_or(|max| level < max)
    }

    /// Whether any per-node metadata field is switched on.
    pub fn prints_metadata(&self) -> bool {
        self.print_owner
            || self.print_group
            || self.print_size
            || self.print_permission
            || self.print_mod_time
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_hidden: false,
            dirs_only: false,
            full_path: false,
            no_report: false,
            follow_links: false,
            prune: false,
            sort: SortOrder::Name,
            print_owner: false,
            print_group: false,
            print_size: false,
            print_permission: false,
            print_mod_time: false,
            json_stats: false,
            max_level: None,
            file_limit: None,
            indent: DEFAULT_INDENT,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            include_pattern: None,
            exclude_pattern: None,
        }
    }
}

/// Convert the `-1 = unlimited` convention into an optional bound.
pub fn limit_from_signed(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descends_from() {
        let mut opts = Options::default();
        assert!(opts.descends_from(0));
        assert!(opts.descends_from(100));

        opts.max_level = Some(0);
        assert!(!opts.descends_from(0));

        opts.max_level = Some(2);
        assert!(opts.descends_from(1));
        assert!(!opts.descends_from(2));
    }

    #[test]
    fn test_limit_from_signed() {
        assert_eq!(limit_from_signed(-1), None);
        assert_eq!(limit_from_signed(-7), None);
        assert_eq!(limit_from_signed(0), Some(0));
        assert_eq!(limit_from_signed(12), Some(12));
    }

    #[test]
    fn test_prints_metadata() {
        let mut opts = Options::default();
        assert!(!opts.prints_metadata());
        opts.print_size = true;
        assert!(opts.prints_metadata());
    }
}
