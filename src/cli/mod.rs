//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Convert iTerm2 color themes into GNOME Terminal profiles via dconf.
#[derive(Parser, Debug)]
#[command(name = "iterm2gnome", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "ITERM2GNOME_FORMAT"
    )]
    pub format: OutputFormat,

    /// Verbose output (repeat for more detail)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON.
    pub const fn use_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a theme and write it into the dconf profile store
    Apply(ApplyArgs),

    /// Parse a theme and print its converted colors without touching dconf
    Show(ShowArgs),

    /// List GNOME Terminal profiles currently in the store
    ListProfiles(ListProfilesArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Path to the .itermcolors theme file
    pub theme: PathBuf,

    /// Print the dconf commands instead of executing them
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the .itermcolors theme file
    pub theme: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ListProfilesArgs {
    /// Show profile identifiers alongside names
    #[arg(long, short = 'l')]
    pub long: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
