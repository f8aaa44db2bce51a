use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sourcemap-remap")]
#[command(about = "Flatten a chain of source maps into one map of the original sources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (default: ./.sourcemap-remap.toml)
    #[arg(long, global = true, env = "SOURCEMAP_REMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flatten a source map and every upstream map found next to its sources
    Flatten(FlattenArgs),

    /// Trace a single generated position back to its original source
    Lookup(LookupArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Options shared by commands that build a source map tree.
#[derive(Args, Clone)]
pub struct LoadArgs {
    /// Source map of the final build output. Pass several, most recent
    /// transformation first, to flatten an explicit chain.
    #[arg(required = true)]
    pub maps: Vec<PathBuf>,

    /// Directory that source paths are resolved against (default: directory of the last map)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Read original files from disk and embed their content
    #[arg(long)]
    pub read_content: bool,

    /// Maximum number of upstream map levels to follow
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Parser)]
pub struct FlattenArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output file for the flattened map (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave `sourcesContent` out of the output
    #[arg(long)]
    pub exclude_content: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Print decoded segments instead of the encoded map
    #[arg(long, conflicts_with = "output")]
    pub decoded: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Zero-based generated line
    #[arg(short, long)]
    pub line: u32,

    /// Zero-based generated column
    #[arg(short, long)]
    pub column: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}
