//! Recast CLI, the command-line front of the Verilog unparser.
//!
//! Provides `recast print` for rendering a serialized syntax tree back to
//! Verilog source, and `recast check` for reporting what a render would
//! complain about without writing anything.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod print;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Recast renders elaborated Verilog syntax trees as source text.
#[derive(Parser, Debug)]
#[command(name = "recast", version, about = "Recast Verilog unparser")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `recast.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Override `format.tab_width` from the configuration.
    #[arg(long, global = true)]
    pub tab_width: Option<usize>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a syntax tree document as Verilog source.
    Print(PrintArgs),
    /// Render into nothing and report diagnostics only.
    Check(CheckArgs),
}

/// Arguments for the `recast print` subcommand.
#[derive(Parser, Debug)]
pub struct PrintArgs {
    /// Syntax tree document (JSON) to render.
    pub document: PathBuf,

    /// Output file. Defaults to standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `recast check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Syntax tree document (JSON) to check.
    pub document: PathBuf,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
    /// How diagnostics are reported.
    pub format: ReportFormat,
    /// Optional indentation width override.
    pub tab_width: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => stderr_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
        format: cli.format,
        tab_width: cli.tab_width,
    };

    let result = match cli.command {
        Command::Print(ref args) => print::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn stderr_is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
