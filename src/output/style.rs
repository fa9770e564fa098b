//! Styling strategy for the text renderer
//!
//! Colors are carried by an explicit `Palette` value handed to the formatter,
//! so nothing about styling is process-wide.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::metadata::EntryKind;

/// Names accepted by [`parse_color`], without the optional `b` (bold) suffix.
pub const COLOR_NAMES: &[&str] = &[
    "gray", "green", "blue", "brown", "red", "black", "magenta", "cyan",
];

/// Which part of a tree line is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dir,
    File,
    Symlink,
    Tee,
    Elbow,
    Pipe,
}

/// Colors for each [`Role`]. A spec with no attributes writes plain text.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    pub dir: ColorSpec,
    pub file: ColorSpec,
    pub symlink: ColorSpec,
    pub tee: ColorSpec,
    pub elbow: ColorSpec,
    pub pipe: ColorSpec,
}

impl Palette {
    /// No styling at all.
    pub fn plain() -> Self {
        Self::default()
    }

    /// gray directories, green files, blue links, brown connectors.
    pub fn standard() -> Self {
        let spec = |name| parse_color(name).unwrap_or_default();
        Self {
            dir: spec("gray"),
            file: spec("green"),
            symlink: spec("blue"),
            tee: spec("brown"),
            elbow: spec("brown"),
            pipe: spec("brown"),
        }
    }

    pub fn spec(&self, role: Role) -> &ColorSpec {
        match role {
            Role::Dir => &self.dir,
            Role::File => &self.file,
            Role::Symlink => &self.symlink,
            Role::Tee => &self.tee,
            Role::Elbow => &self.elbow,
            Role::Pipe => &self.pipe,
        }
    }

    /// The role used for a node label of the given kind.
    pub fn role_for(kind: EntryKind) -> Role {
        match kind {
            EntryKind::Directory => Role::Dir,
            EntryKind::SymlinkToDir | EntryKind::SymlinkToFile => Role::Symlink,
            EntryKind::File | EntryKind::Other => Role::File,
        }
    }

    /// Write `text` in the color of `role`.
    pub fn paint<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        role: Role,
        text: &str,
    ) -> io::Result<()> {
        let spec = self.spec(role);
        if spec.is_none() {
            return write!(out, "{}", text);
        }
        out.set_color(spec)?;
        write!(out, "{}", text)?;
        out.reset()
    }
}

/// Parse a color name such as `green` or `cyanb` (bold cyan).
///
/// Matching is case-insensitive. Returns `None` for unknown names.
pub fn parse_color(name: &str) -> Option<ColorSpec> {
    let name = name.trim().to_lowercase();
    let (base, bold) = match COLOR_NAMES.iter().find(|c| **c == name) {
        Some(_) => (name.as_str(), false),
        None => match name.strip_suffix('b') {
            Some(base) if COLOR_NAMES.contains(&base) => (base, true),
            _ => return None,
        },
    };

    let color = match base {
        "gray" => Color::White,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "brown" => Color::Yellow,
        "red" => Color::Red,
        "black" => Color::Black,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => return None,
    };

    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(bold);
    Some(spec)
}
