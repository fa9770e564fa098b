//! CLI entry point for hitree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::warn;

use hitree::output::{OutputSink, Palette, STDOUT, TreeFormatter, parse_color, write_json};
use hitree::tree::{DEFAULT_INDENT, DEFAULT_TIME_FORMAT, limit_from_signed};
use hitree::{Options, OutputConfig, Result, SortOrder, TreeError, TreeWalker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode, environment and destination.
fn should_use_color(mode: ColorMode, destination: &str) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            destination == STDOUT && std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hitree")]
#[command(about = "Print the tree structure of a directory")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print the tree as JSON
    #[arg(short = 'j', long = "json", env = "HITREE_JSON")]
    json: bool,

    /// JSON indentation width
    #[arg(long = "jsonindent", default_value_t = DEFAULT_INDENT, env = "HITREE_JSONINDENT")]
    json_indent: usize,

    /// Include per-node stats in JSON output
    #[arg(long = "jsonstats", env = "HITREE_JSONSTATS")]
    json_stats: bool,

    /// Write the result to this file instead of stdout
    #[arg(short = 'o', long = "output", default_value = STDOUT, env = "HITREE_OUTPUT")]
    output: String,

    /// List directories only
    #[arg(short = 'd', long = "dironly", env = "HITREE_DIRONLY")]
    dir_only: bool,

    /// List all files and directories, hidden ones included
    #[arg(short = 'a', long = "all", env = "HITREE_ALL")]
    all: bool,

    /// Print the full path of every entry
    #[arg(short = 'f', long = "fullpath", env = "HITREE_FULLPATH")]
    full_path: bool,

    /// Omit the directory and file report at the end of the listing
    #[arg(long = "noreport", env = "HITREE_NOREPORT")]
    no_report: bool,

    /// Follow symbolic links to directories
    #[arg(short = 'l', long = "followlink", env = "HITREE_FOLLOWLINK")]
    follow_link: bool,

    /// Prune directories without files from the output
    #[arg(long = "prune", env = "HITREE_PRUNE")]
    prune: bool,

    /// Max display depth of the tree (-1 = unlimited)
    #[arg(
        short = 'L',
        long = "level",
        default_value_t = -1,
        allow_negative_numbers = true,
        env = "HITREE_LEVEL"
    )]
    level: i64,

    /// Do not descend directories that contain more than this many entries (-1 = unlimited)
    #[arg(
        long = "filelimit",
        default_value_t = -1,
        allow_negative_numbers = true,
        env = "HITREE_FILELIMIT"
    )]
    file_limit: i64,

    /// strftime format used with --modtime
    #[arg(long = "timefmt", default_value = DEFAULT_TIME_FORMAT, env = "HITREE_TIMEFMT")]
    time_format: String,

    /// Print permissions of each entry
    #[arg(short = 'p', long = "protection", env = "HITREE_PROTECTION")]
    protection: bool,

    /// Print the size of each entry in bytes
    #[arg(short = 's', long = "size", env = "HITREE_SIZE")]
    size: bool,

    /// Print the owner id of each entry
    #[arg(short = 'u', long = "user", env = "HITREE_USER")]
    user: bool,

    /// Print the group id of each entry
    #[arg(short = 'g', long = "group", env = "HITREE_GROUP")]
    group: bool,

    /// Print the last modification time of each entry
    #[arg(short = 'D', long = "modtime", env = "HITREE_MODTIME")]
    mod_time: bool,

    /// Sort in reverse alphabetic order
    #[arg(short = 'r', long = "reverse", env = "HITREE_REVERSE")]
    reverse: bool,

    /// Sort by last modification time instead of alphabetically
    #[arg(
        short = 't',
        long = "sortbymodtime",
        conflicts_with = "reverse",
        env = "HITREE_SORTBYMODTIME"
    )]
    sort_by_mod_time: bool,

    /// List only files matching the wildcard pattern
    #[arg(short = 'P', long = "includepattern", env = "HITREE_INCLUDEPATTERN")]
    include_pattern: Option<String>,

    /// Do not list files matching the wildcard pattern
    #[arg(short = 'I', long = "excludepattern", env = "HITREE_EXCLUDEPATTERN")]
    exclude_pattern: Option<String>,

    /// Turn colorization off
    #[arg(short = 'n', long = "nocolor", env = "HITREE_NOCOLOR")]
    no_color: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Directory color (gray, green, blue, brown, red, black, magenta, cyan; append b for bold)
    #[arg(long = "dircolor", default_value = "gray", env = "HITREE_DIRCOLOR")]
    dir_color: String,

    /// File color
    #[arg(long = "filecolor", default_value = "green", env = "HITREE_FILECOLOR")]
    file_color: String,

    /// Symbolic link color
    #[arg(long = "symlinkcolor", default_value = "blue", env = "HITREE_SYMLINKCOLOR")]
    symlink_color: String,

    /// Color of the connector for non-last entries
    #[arg(long = "tlinkcolor", default_value = "brown", env = "HITREE_TLINKCOLOR")]
    tlink_color: String,

    /// Color of the connector for the last entry
    #[arg(long = "llinkcolor", default_value = "brown", env = "HITREE_LLINKCOLOR")]
    llink_color: String,

    /// Color of the vertical pipes
    #[arg(long = "pipecolor", default_value = "brown", env = "HITREE_PIPECOLOR")]
    pipe_color: String,
}

impl Args {
    fn to_options(&self) -> Options {
        let sort = if self.reverse {
            SortOrder::NameReverse
        } else if self.sort_by_mod_time {
            SortOrder::ModTime
        } else {
            SortOrder::Name
        };

        Options {
            include_hidden: self.all,
            dirs_only: self.dir_only,
            full_path: self.full_path,
            no_report: self.no_report,
            follow_links: self.follow_link,
            prune: self.prune,
            sort,
            print_owner: self.user,
            print_group: self.group,
            print_size: self.size,
            print_permission: self.protection,
            print_mod_time: self.mod_time,
            json_stats: self.json_stats,
            max_level: limit_from_signed(self.level),
            file_limit: limit_from_signed(self.file_limit),
            indent: self.json_indent,
            time_format: self.time_format.clone(),
            include_pattern: self.include_pattern.clone(),
            exclude_pattern: self.exclude_pattern.clone(),
        }
    }

    fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color
        }
    }

    /// Build the palette from the color options, keeping the default for unknown names.
    fn palette(&self) -> Palette {
        let standard = Palette::standard();
        let pick = |flag: &str, name: &str, fallback: &termcolor::ColorSpec| {
            parse_color(name).unwrap_or_else(|| {
                warn!(
                    "invalid color '{}' for --{}, expected one of {}",
                    name,
                    flag,
                    hitree::output::COLOR_NAMES.join(", ")
                );
                fallback.clone()
            })
        };

        Palette {
            dir: pick("dircolor", &self.dir_color, &standard.dir),
            file: pick("filecolor", &self.file_color, &standard.file),
            symlink: pick("symlinkcolor", &self.symlink_color, &standard.symlink),
            tee: pick("tlinkcolor", &self.tlink_color, &standard.tee),
            elbow: pick("llinkcolor", &self.llink_color, &standard.elbow),
            pipe: pick("pipecolor", &self.pipe_color, &standard.pipe),
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn run(args: &Args) -> Result<()> {
    // Patterns are compiled here, before any filesystem access
    let walker = TreeWalker::new(args.to_options())?;
    let tree = walker.walk(&args.path)?;

    let use_color = should_use_color(args.color_mode(), &args.output);
    let palette = if use_color {
        args.palette()
    } else {
        Palette::plain()
    };
    let config = OutputConfig::from_options(walker.options(), palette);

    let mut sink = OutputSink::open(&args.output, use_color)?;
    let rendered = if args.json {
        write_json(&tree, &config, sink.writer())
    } else {
        TreeFormatter::new(config).write(&tree, sink.writer())
    };
    let rendered = rendered.map_err(|e| TreeError::sink(sink.destination(), e));
    // Flush even when rendering failed
    let finished = sink.finish();

    rendered?;
    finished
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("hitree: {}", e);
        process::exit(1);
    }
}
