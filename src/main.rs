//! CLI entry point for stepwalk

use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use stepwalk::{
    FileFilter, JsonFormatter, OsFs, OutputConfig, StreamingFormatter, StreamingOutput,
    StreamingWalker, WalkSummary, WalkerConfig,
};

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
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
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stepwalk")]
#[command(about = "List a directory tree in lexical order, pruning as it goes")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Skip entries ignored by the root's .gitignore (and .git itself)
    #[arg(short = 'g', long = "gitignore")]
    gitignore: bool,

    /// Do not walk the partial contents of unreadable directories
    #[arg(long = "skip-errors")]
    skip_errors: bool,

    /// Output one JSON object per line
    #[arg(long = "json")]
    json: bool,

    /// Omit the summary line
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let walker_config = WalkerConfig {
        max_depth: args.level,
        dirs_only: args.dirs_only,
        ignore_patterns: args.ignore.clone(),
        prune_on_error: args.skip_errors,
    };

    let mut filter = FileFilter::new(walker_config.ignore_patterns.clone());
    if args.gitignore {
        filter = filter.with_gitignore(&args.path);
    }
    let walker = StreamingWalker::new(walker_config).with_filter(filter);
    let (base, root) = walk_root(&args.path);
    let fsys = OsFs::new(base);

    let result = if args.json {
        let mut formatter = JsonFormatter::stdout();
        run(&walker, &fsys, &root, &mut formatter)
    } else {
        let mut formatter = StreamingFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            show_summary: !args.no_summary,
        });
        run(&walker, &fsys, &root, &mut formatter)
    };

    match result {
        // already reported by the formatter
        Ok(summary) if summary.root_failed => process::exit(1),
        Ok(summary) if summary.errors > 0 => process::exit(2),
        Ok(_) => {}
        Err(e) => {
            eprintln!("stepwalk: error writing output: {}", e);
            process::exit(1);
        }
    }
}

fn run<O: StreamingOutput>(
    walker: &StreamingWalker,
    fsys: &OsFs,
    root: &str,
    output: &mut O,
) -> std::io::Result<WalkSummary> {
    walker.walk_streaming(fsys, root, output)
}

/// Split a command-line path into the directory the filesystem is opened on
/// and the slash path walked inside it: relative paths are walked from the
/// current directory, absolute ones from `/`.
fn walk_root(path: &Path) -> (PathBuf, String) {
    let resolved;
    let path = if path.components().any(|c| c == Component::ParentDir) {
        // `..` is not a valid walk path, resolve it away
        resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        resolved.as_path()
    } else {
        path
    };

    let base = if path.has_root() {
        PathBuf::from("/")
    } else {
        PathBuf::from(".")
    };
    let elems: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let root = if elems.is_empty() {
        ".".to_string()
    } else {
        elems.join("/")
    };
    (base, root)
}
