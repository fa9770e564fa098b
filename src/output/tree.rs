//! Tree formatter for the glyph-tree text output
//!
//! `TreeFormatter` draws a finished `TreeNode` as an indented diagram with
//! box-drawing connectors, followed by a directory/file count report.

use std::io;

use termcolor::{NoColor, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::style::{Palette, Role};
use super::utils::{COLUMN_PAD, PIPE, connector, metadata_prefix};

/// Formatter for text tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree to an uncolored string.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writes into a Vec never fail
        let _ = self.write(node, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write the tree and, unless disabled, the trailing report.
    pub fn write<W: WriteColor + ?Sized>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        self.write_label(node, out)?;
        let mut ancestors_last = Vec::new();
        self.write_children(node, out, &mut ancestors_last)?;

        if !self.config.no_report {
            let stats = node.stats();
            write!(
                out,
                "\n{} directories, {} files\n",
                stats.dir_count, stats.file_count
            )?;
        }
        Ok(())
    }

    fn write_children<W: WriteColor + ?Sized>(
        &self,
        node: &TreeNode,
        out: &mut W,
        ancestors_last: &mut Vec<bool>,
    ) -> io::Result<()> {
        let palette = &self.config.palette;
        // Connectors are decided against surviving siblings only
        let visible: Vec<&TreeNode> = node.visible_children(self.config.prune).collect();
        let count = visible.len();

        for (i, child) in visible.into_iter().enumerate() {
            let is_last = i + 1 == count;

            for &ancestor_last in ancestors_last.iter() {
                if ancestor_last {
                    write!(out, " ")?;
                } else {
                    palette.paint(out, Role::Pipe, PIPE)?;
                }
                write!(out, "{}", COLUMN_PAD)?;
            }
            let role = if is_last { Role::Elbow } else { Role::Tee };
            palette.paint(out, role, connector(is_last))?;
            self.write_label(child, out)?;

            ancestors_last.push(is_last);
            self.write_children(child, out, ancestors_last)?;
            ancestors_last.pop();
        }
        Ok(())
    }

    fn write_label<W: WriteColor + ?Sized>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        let palette = &self.config.palette;
        let role = Palette::role_for(node.entry().kind());

        if let Some(meta) =
            metadata_prefix(node, &self.config.fields, &self.config.time_format)
        {
            palette.paint(out, role, &meta)?;
        }
        palette.paint(out, role, &node.label(self.config.full_path))?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MetadataFields;
    use crate::test_utils::TestTree;
    use crate::tree::{Options, traverse};
    use termcolor::Ansi;

    const REFERENCE: &str = "Root
├──a
│  ├──b
│  │  └──normal.go
│  ├──c
│  │  ├──d
│  │  │  ├──e
│  │  │  └──normal.py
│  │  └──normal.go
│  └──normal.py
└──normal.go

5 directories, 5 files
";

    fn render(fixture: &TestTree, options: Options) -> String {
        let tree = traverse(fixture.root(), &options).unwrap();
        let config = OutputConfig::from_options(&options, Palette::plain());
        TreeFormatter::new(config).format(&tree)
    }

    #[test]
    fn test_reference_rendering() {
        let fixture = TestTree::reference();
        assert_eq!(render(&fixture, Options::default()), REFERENCE);
    }

    #[test]
    fn test_include_hidden_rendering() {
        let fixture = TestTree::reference();
        let options = Options {
            include_hidden: true,
            ..Default::default()
        };
        let out = render(&fixture, options);
        assert!(out.contains("│  ├──b\n│  │  ├──.hidden\n│  │  └──normal.go\n"));
        assert!(out.ends_with("\n5 directories, 6 files\n"));
    }

    #[test]
    fn test_include_pattern_rendering() {
        let fixture = TestTree::reference();
        let options = Options {
            include_pattern: Some("*.go".to_string()),
            ..Default::default()
        };
        let expected = "Root
├──a
│  ├──b
│  │  └──normal.go
│  └──c
│     ├──d
│     │  └──e
│     └──normal.go
└──normal.go

5 directories, 3 files
";
        assert_eq!(render(&fixture, options), expected);
    }

    #[test]
    fn test_prune_rendering() {
        let fixture = TestTree::reference();
        let options = Options {
            prune: true,
            ..Default::default()
        };
        let expected = "Root
├──a
│  ├──b
│  │  └──normal.go
│  ├──c
│  │  ├──d
│  │  │  └──normal.py
│  │  └──normal.go
│  └──normal.py
└──normal.go

5 directories, 5 files
";
        let out = render(&fixture, options.clone());
        assert_eq!(out, expected);
        assert_eq!(render(&fixture, options), out);
    }

    #[test]
    fn test_prune_removes_nested_empty_directories() {
        let fixture = TestTree::new("Top");
        fixture.add_dir("empty/inner/deeper");
        fixture.add_file("keep/file.txt", "");
        fixture.add_dir("keep/nothing");
        let options = Options {
            prune: true,
            ..Default::default()
        };
        let expected = "Top
└──keep
   └──file.txt

5 directories, 1 files
";
        assert_eq!(render(&fixture, options), expected);
    }

    #[test]
    fn test_elbow_goes_to_last_surviving_sibling() {
        let fixture = TestTree::new("Top");
        fixture.add_file("a.txt", "");
        fixture.add_dir("zzz");
        let options = Options {
            prune: true,
            no_report: true,
            ..Default::default()
        };
        assert_eq!(render(&fixture, options), "Top\n└──a.txt\n");
    }

    #[test]
    fn test_level_one_rendering() {
        let fixture = TestTree::reference();
        let options = Options {
            max_level: Some(1),
            ..Default::default()
        };
        assert_eq!(
            render(&fixture, options),
            "Root\n├──a\n└──normal.go\n\n1 directories, 1 files\n"
        );
    }

    #[test]
    fn test_no_report() {
        let fixture = TestTree::reference();
        let options = Options {
            no_report: true,
            ..Default::default()
        };
        let out = render(&fixture, options);
        assert!(out.ends_with("└──normal.go\n"));
        assert!(!out.contains("directories"));
    }

    #[test]
    fn test_dirs_only_rendering() {
        let fixture = TestTree::reference();
        let options = Options {
            dirs_only: true,
            ..Default::default()
        };
        let expected = "Root
└──a
   ├──b
   └──c
      └──d
         └──e

5 directories, 5 files
";
        assert_eq!(render(&fixture, options), expected);
    }

    #[test]
    fn test_full_path_labels() {
        let fixture = TestTree::reference();
        let options = Options {
            full_path: true,
            no_report: true,
            ..Default::default()
        };
        let out = render(&fixture, options);
        let root = std::path::absolute(fixture.root()).unwrap();
        assert!(out.starts_with(&format!("{}\n", root.display())));
        assert!(out.contains(&format!("└──{}\n", root.join("normal.go").display())));
    }

    #[test]
    fn test_size_metadata_precedes_label() {
        let fixture = TestTree::new("Top");
        fixture.add_file("data.bin", "0123456789");
        let tree = traverse(fixture.root(), &Options::default()).unwrap();
        let config = OutputConfig {
            fields: MetadataFields {
                size: true,
                ..Default::default()
            },
            no_report: true,
            ..Default::default()
        };
        let out = TreeFormatter::new(config).format(&tree);
        assert!(out.contains("└──[ 10 ]data.bin\n"), "{}", out);
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let fixture = TestTree::reference();
        let tree = traverse(fixture.root(), &Options::default()).unwrap();
        let config = OutputConfig {
            palette: Palette::standard(),
            ..Default::default()
        };
        let mut out = Ansi::new(Vec::new());
        TreeFormatter::new(config).write(&tree, &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("normal.go"));
        assert!(text.ends_with("5 directories, 5 files\n"));
    }
}
