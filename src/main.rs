//! iterm2gnome - Convert iTerm2 color themes into GNOME Terminal profiles.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use clap::Parser;
use console::style;
use serde::Serialize;

use iterm2gnome::cli::{self, Cli, Commands};
use iterm2gnome::error::{ConvertError, Result};
use iterm2gnome::store::{
    DconfExecutor, DconfStore, Executor, PrintingExecutor, ProfileStore,
};
use iterm2gnome::theme::PALETTE_SIZE;
use iterm2gnome::{logging, pipeline};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Apply(args) => cmd_apply(cli, args),
        Commands::Show(args) => cmd_show(cli, args),
        Commands::ListProfiles(args) => cmd_list_profiles(cli, args),
        Commands::Version => cmd_version(cli),
        Commands::Completions(args) => cmd_completions(cli, args),
    }
}

// === Command Implementations ===

/// Executor that applies nothing; used when JSON output carries the
/// planned operations instead of printing command lines.
struct NullExecutor;

impl Executor for NullExecutor {
    fn apply(&self, _op: &iterm2gnome::dconf::WriteOperation) -> Result<()> {
        Ok(())
    }
}

fn cmd_apply(cli: &Cli, args: &cli::ApplyArgs) -> Result<()> {
    let store = DconfStore;

    let executor: Box<dyn Executor> = match (args.dry_run, cli.use_json()) {
        (true, false) => Box::new(PrintingExecutor),
        (true, true) => Box::new(NullExecutor),
        (false, _) => Box::new(DconfExecutor),
    };

    let report = pipeline::run(&args.theme, &store, executor.as_ref())?;

    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "theme": report.theme_name,
                "profile_id": report.profile_id,
                "created": report.created,
                "dry_run": args.dry_run,
                "operations": report.operations,
                "ok": true
            }),
        );
    } else if !args.dry_run && !cli.quiet {
        let verb = if report.created { "Created" } else { "Updated" };
        println!(
            "{} profile {} ({})",
            verb,
            style(&report.theme_name).green().bold(),
            report.profile_id
        );
    }
    Ok(())
}

fn cmd_show(cli: &Cli, args: &cli::ShowArgs) -> Result<()> {
    let (name, export) = pipeline::load_theme(&args.theme)?;

    if cli.use_json() {
        output_json(cli, &serde_json::json!({ "theme": name, "colors": export }));
    } else {
        println!("{}: {}", style("Theme").bold(), name);
        println!("{}: {}", style("Foreground").bold(), export.foreground);
        println!("{}: {}", style("Background").bold(), export.background);
        println!("{}: {}", style("Bold").bold(), export.bold);
        for slot in 0..PALETTE_SIZE {
            match &export.palette[slot] {
                Some(color) => println!("  ansi {slot:>2}: {color}"),
                None => println!("  ansi {slot:>2}: {}", style("(unset)").dim()),
            }
        }
    }
    Ok(())
}

fn cmd_list_profiles(cli: &Cli, args: &cli::ListProfilesArgs) -> Result<()> {
    let profiles = DconfStore.list_profiles()?;

    if cli.use_json() {
        output_json(cli, &profiles);
    } else if profiles.is_empty() {
        println!("{}", style("No profiles found in the store").yellow());
    } else {
        for p in &profiles {
            if args.long {
                println!("{} {}", style(&p.id).dim(), p.name);
            } else {
                println!("{}", p.name);
            }
        }
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty() == "true",
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    } else {
        println!("iterm2gnome {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() == "true" {
                " (dirty)"
            } else {
                ""
            }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
        println!("target: {}", build_info::target());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(_cli: &Cli, args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "iterm2gnome",
        &mut io::stdout(),
    );
    Ok(())
}

// === Utility Functions ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data).unwrap()
    } else {
        serde_json::to_string_pretty(data).unwrap()
    };
    println!("{json}");
}

fn output_error(cli: &Cli, error: &ConvertError) {
    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}
